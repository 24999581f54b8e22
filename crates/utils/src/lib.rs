//! Shared utilities for minicache
//!
//! Logging setup, the structured events every crate emits, and atomic
//! file writes.

pub mod atomic_file;
pub mod tracing;

pub use atomic_file::*;
pub use self::tracing::*;
