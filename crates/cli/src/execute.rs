use crate::commands::{self, Commands};
use minicache_cache::{CacheOrchestrator, DirectoryBackend, SystemCommandExecutor};
use minicache_config::RunConfig;
use minicache_core::{HostArch, Result};

/// Everything a command needs to talk to the tool and the backend
pub struct RunContext {
    pub config: RunConfig,
    pub arch: HostArch,
    backend: DirectoryBackend,
    executor: SystemCommandExecutor,
}

impl RunContext {
    pub fn new(config: RunConfig, arch: Option<HostArch>) -> Self {
        let backend = DirectoryBackend::new(config.store_dir.clone());
        Self {
            config,
            arch: arch.unwrap_or_else(HostArch::current),
            backend,
            executor: SystemCommandExecutor::new(),
        }
    }

    pub fn orchestrator(&self) -> CacheOrchestrator<'_> {
        CacheOrchestrator::new(&self.backend, &self.executor, &self.config)
            .with_arch(self.arch.clone())
    }
}

impl Commands {
    pub async fn execute(self, ctx: &RunContext) -> Result<()> {
        match self {
            Commands::Restore => commands::restore::execute(ctx).await,
            Commands::Save => commands::save::execute(ctx).await,
            Commands::Keys { tool_version } => commands::keys::execute(ctx, tool_version).await,
            Commands::Version => commands::version::execute(ctx).await,
        }
    }
}
