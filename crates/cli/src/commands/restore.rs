use crate::execute::RunContext;
use minicache_cache::write_hits;
use minicache_core::Result;

pub async fn execute(ctx: &RunContext) -> Result<()> {
    let hits = ctx.orchestrator().restore().await?;
    write_hits(&ctx.config.state_file, &hits)?;
    println!("{}", serde_json::to_string(&hits)?);
    Ok(())
}
