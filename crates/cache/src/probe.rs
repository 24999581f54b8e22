//! Reads the installed minikube version

use crate::executor::CommandExecutor;
use minicache_core::constants::VERSION_ARGS;
use minicache_core::types::CommandArguments;
use minicache_core::{Error, Result};

/// Run `<tool> version --short` and return its trimmed stdout.
///
/// Fails if the tool cannot be spawned, exits unsuccessfully, or prints
/// nothing usable. Every call spawns a fresh process; nothing is cached.
pub async fn probe_version(executor: &dyn CommandExecutor, tool: &str) -> Result<String> {
    let args = CommandArguments::from(VERSION_ARGS);
    let output = executor.execute(tool, &args).await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => "exited unsuccessfully".to_string(),
            stderr => stderr.to_string(),
        };
        return Err(Error::command_execution(
            tool,
            args.into_inner(),
            message,
            output.status.code(),
        ));
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| {
        Error::command_execution(
            tool,
            args.clone().into_inner(),
            format!("version output is not valid UTF-8: {e}"),
            None,
        )
    })?;

    let version = stdout.trim();
    if version.is_empty() {
        return Err(Error::command_execution(
            tool,
            args.into_inner(),
            "printed an empty version",
            None,
        ));
    }

    tracing::debug!(tool = %tool, version = %version, "probed tool version");
    Ok(version.to_string())
}
