//! Core domain types for minicache.
//!
//! - **`artifact`**: the three cached artifact categories
//! - **`arch`**: host architecture token used in keys
//! - **`commands`**: external command argument handling
//! - **`hits`**: the per-run cache hit record
//! - **`key`**: computed cache keys and their paths

pub mod arch;
pub mod artifact;
pub mod commands;
pub mod hits;
pub mod key;

pub use arch::*;
pub use artifact::*;
pub use commands::*;
pub use hits::*;
pub use key::*;
