use crate::execute::RunContext;
use minicache_core::Result;

pub async fn execute(ctx: &RunContext, tool_version: Option<String>) -> Result<()> {
    let orchestrator = ctx.orchestrator();
    let version = match tool_version {
        Some(version) => version,
        None => orchestrator.probe_version().await?,
    };

    for key in orchestrator.keys(&version) {
        let paths: Vec<String> = key
            .paths
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        println!("{}\t{}\t{}", key.category, key.key, paths.join(","));
    }
    Ok(())
}
