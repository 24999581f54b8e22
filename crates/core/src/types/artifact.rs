//! The three artifact categories minikube downloads and we cache

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cached minikube artifact type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactCategory {
    /// Virtual-machine boot image
    Iso,
    /// Kubernetes-in-container base image cache
    Kic,
    /// Pre-pulled container image bundle
    Preload,
}

impl ArtifactCategory {
    /// Every category, in the order restore and save visit them
    pub const ALL: [ArtifactCategory; 3] = [
        ArtifactCategory::Iso,
        ArtifactCategory::Kic,
        ArtifactCategory::Preload,
    ];

    /// Name used both as the key prefix and the cache sub-directory
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactCategory::Iso => "iso",
            ArtifactCategory::Kic => "kic",
            ArtifactCategory::Preload => "preload",
        }
    }
}

impl fmt::Display for ArtifactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_key_prefix() {
        let names: Vec<String> = ArtifactCategory::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["iso", "kic", "preload"]);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&ArtifactCategory::Preload).unwrap();
        assert_eq!(json, r#""preload""#);
    }
}
