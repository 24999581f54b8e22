//! Builder methods for creating errors with context

use super::types::Error;
use crate::types::ArtifactCategory;
use std::path::PathBuf;

// Helper methods for creating errors with context
impl Error {
    /// Create a command execution error
    #[must_use]
    pub fn command_execution(
        command: impl Into<String>,
        args: Vec<String>,
        message: impl Into<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Error::CommandExecution {
            command: command.into(),
            args,
            message: message.into(),
            exit_code,
        }
    }

    /// Create a backend error without an underlying cause
    #[must_use]
    pub fn backend(
        operation: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::Backend {
            operation: operation.into(),
            key: key.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend error wrapping the error that caused it
    #[must_use]
    pub fn backend_with_source(
        operation: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Backend {
            operation: operation.into(),
            key: key.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create an invalid key error
    #[must_use]
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a save failure covering the given categories
    #[must_use]
    pub fn save_failed(categories: Vec<ArtifactCategory>, source: Error) -> Self {
        Error::SaveFailed {
            categories,
            source: Box::new(source),
        }
    }

    /// Create a file system error
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Exit code of a failed command, if the error came from one
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::CommandExecution { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}
