use minicache_core::constants::MINICACHE_LOG_VAR;
use minicache_core::ArtifactCategory;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tracing::{debug, info, span, Level, Span};

/// Initialize the tracing system
///
/// The filter comes from `RUST_LOG`, then `MINICACHE_LOG`, then defaults to
/// `info`. Output goes to stderr so stdout stays free for command results;
/// ANSI colours are only used when stderr is a terminal.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = build_filter(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        std::env::var(MINICACHE_LOG_VAR).ok(),
    )?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn build_filter(
    rust_log: Option<String>,
    minicache_log: Option<String>,
) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    let directives = rust_log
        .or(minicache_log)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "info".to_string());
    EnvFilter::try_new(directives)
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span covering one restore or save pass
pub fn run_span(operation: &str, version: &str) -> Span {
    span!(Level::INFO, "cache_run", operation = %operation, version = %version)
}

/// Emit a structured event for a restore outcome
pub fn cache_restored(category: ArtifactCategory, key: &str, hit: bool) {
    if hit {
        info!(category = %category, key = %key, "cache_hit");
    } else {
        info!(category = %category, key = %key, "cache_miss");
    }
}

/// Emit a structured event for a completed save
pub fn cache_saved(category: ArtifactCategory, key: &str) {
    info!(category = %category, key = %key, "cache_saved");
}

/// Emit a structured event for a category that save leaves alone
pub fn cache_skipped(category: ArtifactCategory) {
    debug!(category = %category, "cache_save_skipped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_prefers_rust_log() {
        let filter = build_filter(Some("debug".to_string()), Some("warn".to_string())).unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_filter_falls_back_to_minicache_log_then_info() {
        let filter = build_filter(None, Some("warn".to_string())).unwrap();
        assert_eq!(filter.to_string(), "warn");

        let filter = build_filter(None, None).unwrap();
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_invalid_filter_is_an_error() {
        assert!(build_filter(Some("minicache=notalevel".to_string()), None).is_err());
    }
}
