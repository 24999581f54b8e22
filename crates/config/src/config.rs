//! Run configuration for a single restore or save invocation
//!
//! `RunConfig` is immutable once built. It is assembled by
//! [`RunConfigLoader`] with the precedence defaults < environment <
//! command line, and records where its values came from for debugging.

use minicache_core::constants::{
    DEFAULT_CACHE_ROOT, DEFAULT_CONTAINER_RUNTIME, DEFAULT_KUBERNETES_VERSION, DEFAULT_STATE_FILE,
    DEFAULT_TOOL, INPUT_CONTAINER_RUNTIME_VAR, INPUT_KUBERNETES_VERSION_VAR,
    MINICACHE_CACHE_ROOT_VAR, MINICACHE_STATE_FILE_VAR, MINICACHE_STORE_DIR_VAR,
    MINICACHE_TOOL_VAR, STORE_DIR_NAME,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings consulted while computing keys and talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Kubernetes version input, only used for the preload key
    pub kubernetes_version: Option<String>,
    /// Container runtime input, only used for the preload key
    pub container_runtime: Option<String>,
    /// Directory holding the `iso`, `kic` and `preload` caches
    pub cache_root: PathBuf,
    /// Executable probed for its version
    pub tool: String,
    /// Where restore leaves the hit record for save
    pub state_file: PathBuf,
    /// Root of the directory cache backend
    pub store_dir: PathBuf,
    /// Configuration source for debugging
    pub source: ConfigSource,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            kubernetes_version: None,
            container_runtime: None,
            cache_root: PathBuf::from(DEFAULT_CACHE_ROOT),
            tool: DEFAULT_TOOL.to_string(),
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            store_dir: default_store_dir(),
            source: ConfigSource::Default,
        }
    }
}

impl RunConfig {
    /// Kubernetes version token for the preload key, lower-cased, `stable` when unset
    #[must_use]
    pub fn kubernetes_version_token(&self) -> String {
        token_or_default(self.kubernetes_version.as_deref(), DEFAULT_KUBERNETES_VERSION)
    }

    /// Container runtime token for the preload key, lower-cased, `docker` when unset
    #[must_use]
    pub fn container_runtime_token(&self) -> String {
        token_or_default(self.container_runtime.as_deref(), DEFAULT_CONTAINER_RUNTIME)
    }
}

fn token_or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::to_lowercase) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

fn default_store_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join(STORE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".minikube").join(STORE_DIR_NAME))
}

/// Source of configuration for debugging and precedence tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default configuration
    Default,
    /// Environment variables, listing the ones that were set
    Environment(Vec<String>),
    /// Command line argument
    CommandLine,
}

/// Builder for creating run configurations
#[derive(Debug, Default)]
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn with_kubernetes_version(mut self, version: impl Into<String>) -> Self {
        self.config.kubernetes_version = Some(version.into());
        self
    }

    pub fn with_container_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.config.container_runtime = Some(runtime.into());
        self
    }

    pub fn with_cache_root(mut self, cache_root: impl Into<PathBuf>) -> Self {
        self.config.cache_root = cache_root.into();
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.config.tool = tool.into();
        self
    }

    pub fn with_state_file(mut self, state_file: impl Into<PathBuf>) -> Self {
        self.config.state_file = state_file.into();
        self
    }

    pub fn with_store_dir(mut self, store_dir: impl Into<PathBuf>) -> Self {
        self.config.store_dir = store_dir.into();
        self
    }

    /// Set configuration source
    pub fn with_source(mut self, source: ConfigSource) -> Self {
        self.config.source = source;
        self
    }

    /// Build the configuration
    pub fn build(self) -> RunConfig {
        self.config
    }
}

/// Command-line values that take precedence over everything else
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfigOverrides {
    pub kubernetes_version: Option<String>,
    pub container_runtime: Option<String>,
    pub cache_root: Option<PathBuf>,
    pub tool: Option<String>,
    pub state_file: Option<PathBuf>,
    pub store_dir: Option<PathBuf>,
}

impl RunConfigOverrides {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Configuration loader that handles precedence
pub struct RunConfigLoader;

impl RunConfigLoader {
    /// Load configuration from the process environment
    pub fn load() -> RunConfig {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load configuration from the process environment, then apply overrides
    pub fn load_with_overrides(overrides: RunConfigOverrides) -> RunConfig {
        Self::merge_overrides(Self::load(), overrides)
    }

    /// Load configuration using `lookup` to resolve environment variables
    pub fn load_with<F>(lookup: F) -> RunConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        // Inputs are trimmed the way the CI runner's input reader trims them
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut builder = RunConfigBuilder::new();
        let mut seen = Vec::new();

        if let Some(version) = read(INPUT_KUBERNETES_VERSION_VAR) {
            builder = builder.with_kubernetes_version(version);
            seen.push(INPUT_KUBERNETES_VERSION_VAR.to_string());
        }
        if let Some(runtime) = read(INPUT_CONTAINER_RUNTIME_VAR) {
            builder = builder.with_container_runtime(runtime);
            seen.push(INPUT_CONTAINER_RUNTIME_VAR.to_string());
        }
        if let Some(cache_root) = read(MINICACHE_CACHE_ROOT_VAR) {
            builder = builder.with_cache_root(cache_root);
            seen.push(MINICACHE_CACHE_ROOT_VAR.to_string());
        }
        if let Some(tool) = read(MINICACHE_TOOL_VAR) {
            builder = builder.with_tool(tool);
            seen.push(MINICACHE_TOOL_VAR.to_string());
        }
        if let Some(state_file) = read(MINICACHE_STATE_FILE_VAR) {
            builder = builder.with_state_file(state_file);
            seen.push(MINICACHE_STATE_FILE_VAR.to_string());
        }
        if let Some(store_dir) = read(MINICACHE_STORE_DIR_VAR) {
            builder = builder.with_store_dir(store_dir);
            seen.push(MINICACHE_STORE_DIR_VAR.to_string());
        }

        if !seen.is_empty() {
            builder = builder.with_source(ConfigSource::Environment(seen));
        }

        let config = builder.build();
        tracing::debug!(source = ?config.source, "loaded run configuration");
        config
    }

    /// Apply command-line overrides on top of a loaded configuration
    pub fn merge_overrides(config: RunConfig, overrides: RunConfigOverrides) -> RunConfig {
        if overrides.is_empty() {
            return config;
        }

        let mut builder = RunConfigBuilder::from_config(config);
        if let Some(version) = overrides.kubernetes_version {
            builder = builder.with_kubernetes_version(version);
        }
        if let Some(runtime) = overrides.container_runtime {
            builder = builder.with_container_runtime(runtime);
        }
        if let Some(cache_root) = overrides.cache_root {
            builder = builder.with_cache_root(cache_root);
        }
        if let Some(tool) = overrides.tool {
            builder = builder.with_tool(tool);
        }
        if let Some(state_file) = overrides.state_file {
            builder = builder.with_state_file(state_file);
        }
        if let Some(store_dir) = overrides.store_dir {
            builder = builder.with_store_dir(store_dir);
        }
        builder.with_source(ConfigSource::CommandLine).build()
    }
}
