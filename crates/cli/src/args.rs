use crate::commands::Commands;
use clap::{Args, Parser};
use minicache_config::RunConfigOverrides;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "minicache")]
#[command(about = "Restore and save minikube's download caches on CI", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override the environment for any subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Kubernetes version the preload bundle is built for
    #[arg(long, global = true)]
    pub kubernetes_version: Option<String>,

    /// Container runtime the preload bundle is built for
    #[arg(long, global = true)]
    pub container_runtime: Option<String>,

    /// Directory holding the iso, kic and preload caches
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_root: Option<PathBuf>,

    /// Executable asked for its version
    #[arg(long, global = true, value_name = "PATH")]
    pub tool: Option<String>,

    /// File the restore step leaves its hit record in
    #[arg(long, global = true, value_name = "FILE")]
    pub state_file: Option<PathBuf>,

    /// Root directory of the cache store
    #[arg(long, global = true, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// Architecture token to use in keys instead of the host's
    #[arg(long, global = true)]
    pub arch: Option<String>,
}

impl GlobalArgs {
    pub fn overrides(&self) -> RunConfigOverrides {
        RunConfigOverrides {
            kubernetes_version: self.kubernetes_version.clone(),
            container_runtime: self.container_runtime.clone(),
            cache_root: self.cache_root.clone(),
            tool: self.tool.clone(),
            state_file: self.state_file.clone(),
            store_dir: self.store_dir.clone(),
        }
    }
}
