use crate::execute::RunContext;
use minicache_cache::read_hits;
use minicache_core::Result;

pub async fn execute(ctx: &RunContext) -> Result<()> {
    let hits = read_hits(&ctx.config.state_file)?;
    let saved = ctx.orchestrator().save(hits).await?;

    if saved.is_empty() {
        tracing::info!("every cache was restored, nothing to save");
    } else {
        let names: Vec<&str> = saved.iter().map(|c| c.as_str()).collect();
        tracing::info!(saved = %names.join(","), "saved caches");
    }
    Ok(())
}
