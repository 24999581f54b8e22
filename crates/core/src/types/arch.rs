//! Host architecture, spelled the way CI runners report it

use serde::{Deserialize, Serialize};
use std::fmt;

/// Processor architecture token used in cache keys.
///
/// Rust target names are translated to the vocabulary CI runners use
/// (`x64`, `arm64`, ...) so keys line up with those written by other
/// tooling on the same runner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostArch(String);

impl HostArch {
    /// Architecture of the machine we are running on
    #[must_use]
    pub fn current() -> Self {
        Self::from_target_arch(std::env::consts::ARCH)
    }

    /// Translate a Rust `target_arch` value
    #[must_use]
    pub fn from_target_arch(arch: &str) -> Self {
        let name = match arch {
            "x86_64" => "x64",
            "aarch64" => "arm64",
            "x86" => "ia32",
            "powerpc" => "ppc",
            "powerpc64" => "ppc64",
            "loongarch64" => "loong64",
            other => other,
        };
        Self(name.to_string())
    }

    /// Use an architecture token verbatim
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
