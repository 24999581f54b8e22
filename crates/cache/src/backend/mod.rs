//! The external cache service minicache delegates storage to
//!
//! Storage, transport, and matching rules belong to the backend. minicache
//! only asks it to restore or save a list of paths under a key.

mod directory;

pub use directory::DirectoryBackend;

use async_trait::async_trait;
use minicache_core::Result;
use std::path::PathBuf;

/// Cache backend consumed by the restore and save orchestrators
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Look up `key` and, if found, populate `paths` with its contents.
    ///
    /// Returns the matched key on a hit and `None` on a miss. A miss is not
    /// an error.
    async fn restore(&self, key: &str, paths: &[PathBuf]) -> Result<Option<String>>;

    /// Persist the current contents of `paths` under `key`
    async fn save(&self, key: &str, paths: &[PathBuf]) -> Result<()>;
}
