use crate::execute::RunContext;
use minicache_core::Result;

pub async fn execute(ctx: &RunContext) -> Result<()> {
    println!("{}", ctx.orchestrator().probe_version().await?);
    Ok(())
}
