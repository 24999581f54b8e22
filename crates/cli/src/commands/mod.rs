use clap::Subcommand;

pub mod keys;
pub mod restore;
pub mod save;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Restore the iso, kic and preload caches and record which ones hit
    Restore,

    /// Save every cache that missed during restore
    Save,

    /// Print the cache key and path for each artifact category
    Keys {
        /// Use this tool version instead of probing for it
        #[arg(long, value_name = "VERSION")]
        tool_version: Option<String>,
    },

    /// Print the version reported by the probed tool
    Version,
}
