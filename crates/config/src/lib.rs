//! Configuration management for minicache
//!
//! This crate resolves the action inputs and local paths a run needs.

pub mod config;

pub use config::*;
