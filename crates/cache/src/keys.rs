//! Cache key generation for the three minikube artifact categories
//!
//! Keys have the shape `<category>-<version>-<arch>`. The preload bundle
//! depends on which Kubernetes version and container runtime it was built
//! for, so its key also carries `-<kubernetes-version>-<container-runtime>`.
//! No validation is done here: a nonsensical runtime just yields a key that
//! never hits.

use minicache_config::RunConfig;
use minicache_core::{ArtifactCategory, CacheKey, HostArch};
use std::path::{Path, PathBuf};

/// Local directory a category is restored into and saved from
pub fn cache_path(cache_root: &Path, category: ArtifactCategory) -> PathBuf {
    cache_root.join(category.as_str())
}

/// Build the key and path list for one category
pub fn build_cache_key(
    category: ArtifactCategory,
    version: &str,
    arch: &HostArch,
    config: &RunConfig,
) -> CacheKey {
    let mut key = format!("{category}-{version}-{arch}");
    if category == ArtifactCategory::Preload {
        key.push('-');
        key.push_str(&config.kubernetes_version_token());
        key.push('-');
        key.push_str(&config.container_runtime_token());
    }

    CacheKey {
        category,
        key,
        paths: vec![cache_path(&config.cache_root, category)],
    }
}

/// Keys for every category, in restore/save order
pub fn build_all_keys(version: &str, arch: &HostArch, config: &RunConfig) -> [CacheKey; 3] {
    ArtifactCategory::ALL.map(|category| build_cache_key(category, version, arch, config))
}
