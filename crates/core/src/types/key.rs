//! Cache key and the local paths stored under it

use super::artifact::ArtifactCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A computed cache key together with the paths it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheKey {
    pub category: ArtifactCategory,
    pub key: String,
    pub paths: Vec<PathBuf>,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
