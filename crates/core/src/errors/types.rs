//! Core error type definitions

use crate::types::ArtifactCategory;
use std::path::PathBuf;

/// Result type alias for minicache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for minicache operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// External tool invocation errors (spawn failure or non-zero exit)
    CommandExecution {
        command: String,
        args: Vec<String>,
        message: String,
        exit_code: Option<i32>,
    },

    /// Failure reported by the external cache backend
    Backend {
        operation: String,
        key: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Key the backend refuses to store or look up
    InvalidKey { key: String, reason: String },

    /// One or more categories could not be saved
    SaveFailed {
        categories: Vec<ArtifactCategory>,
        #[source]
        source: Box<Error>,
    },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    Configuration { message: String },
}
