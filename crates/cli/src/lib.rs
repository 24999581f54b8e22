pub mod args;
pub mod commands;
pub mod execute;

pub use args::{Cli, GlobalArgs};
pub use commands::Commands;
pub use execute::RunContext;
