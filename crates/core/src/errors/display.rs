//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CommandExecution {
                command,
                args,
                message,
                exit_code,
            } => {
                let args_str = args.join(" ");
                let invocation = if args_str.is_empty() {
                    command.clone()
                } else {
                    format!("{command} {args_str}")
                };
                match exit_code {
                    Some(code) => write!(
                        f,
                        "command '{invocation}' failed with exit code {code}: {message}"
                    ),
                    None => write!(f, "command '{invocation}' failed: {message}"),
                }
            }
            Error::Backend {
                operation,
                key,
                message,
                ..
            } => {
                write!(f, "cache {operation} failed for key '{key}': {message}")
            }
            Error::InvalidKey { key, reason } => {
                write!(f, "invalid cache key '{key}': {reason}")
            }
            Error::SaveFailed { categories, source } => {
                let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
                write!(
                    f,
                    "failed to save caches for {}: {source}",
                    names.join(", ")
                )
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "failed to {operation} '{}': {source}",
                    path.display()
                )
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
        }
    }
}
