//! Core domain types, errors, and constants for `minicache`.
//!
//! ## Key Components
//!
//! - **`errors`**: the primary `Error` enum and `Result` alias shared by every
//!   crate in the workspace.
//! - **`types`**: artifact categories, cache keys, the hit record, and the
//!   host architecture token.
//! - **`constants`**: tool name, default paths, and environment variable names.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
