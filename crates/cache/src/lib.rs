//! Cache handling for minikube's downloaded artifacts
//!
//! This crate decides which of minikube's three artifact caches can be
//! reused on a CI run and saves the ones that could not:
//! - Version probe of the installed tool
//! - Deterministic key generation per artifact category
//! - Concurrent restore and sequential save against a pluggable backend
//! - Hand-off of the hit record between the restore and save steps

pub mod backend;
pub mod executor;
pub mod keys;
pub mod orchestrator;
pub mod probe;
pub mod state;

pub use backend::{CacheBackend, DirectoryBackend};
pub use executor::{CommandExecutor, SystemCommandExecutor};
pub use keys::{build_all_keys, build_cache_key, cache_path};
pub use orchestrator::CacheOrchestrator;
pub use probe::probe_version;
pub use state::{read_hits, write_hits};
