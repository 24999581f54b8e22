use clap::Parser;
use minicache::{Cli, RunContext};
use minicache_config::RunConfigLoader;
use minicache_core::HostArch;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Err(e) = minicache_utils::init() {
        eprintln!("failed to initialise logging: {e}");
    }

    let config = RunConfigLoader::load_with_overrides(cli.global.overrides());
    let ctx = RunContext::new(config, cli.global.arch.map(HostArch::new));

    cli.command.execute(&ctx).await?;
    Ok(())
}
