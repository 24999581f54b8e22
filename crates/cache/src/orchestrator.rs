//! Restore and save passes over the three artifact categories
//!
//! Restore issues all three backend lookups at once and joins them; save
//! walks the missed categories one at a time. Both probe the tool version
//! themselves, so a tool upgraded between the two passes is saved under its
//! new version.

use crate::backend::CacheBackend;
use crate::executor::CommandExecutor;
use crate::keys::{build_all_keys, build_cache_key};
use crate::probe::probe_version;
use minicache_config::RunConfig;
use minicache_core::{ArtifactCategory, CacheHits, CacheKey, Error, HostArch, Result};
use minicache_utils::{cache_restored, cache_saved, cache_skipped, run_span};
use tracing::{instrument, Instrument};

/// Drives restore and save for one run
pub struct CacheOrchestrator<'a> {
    backend: &'a dyn CacheBackend,
    executor: &'a dyn CommandExecutor,
    config: &'a RunConfig,
    arch: HostArch,
}

impl<'a> CacheOrchestrator<'a> {
    pub fn new(
        backend: &'a dyn CacheBackend,
        executor: &'a dyn CommandExecutor,
        config: &'a RunConfig,
    ) -> Self {
        Self {
            backend,
            executor,
            config,
            arch: HostArch::current(),
        }
    }

    /// Override the architecture token used in keys
    pub fn with_arch(mut self, arch: HostArch) -> Self {
        self.arch = arch;
        self
    }

    /// Ask the configured tool for its version
    pub async fn probe_version(&self) -> Result<String> {
        probe_version(self.executor, &self.config.tool).await
    }

    /// Keys for every category under `version`
    pub fn keys(&self, version: &str) -> [CacheKey; 3] {
        build_all_keys(version, &self.arch, self.config)
    }

    /// Probe the version, then restore every category
    pub async fn restore(&self) -> Result<CacheHits> {
        let version = self.probe_version().await?;
        self.restore_with_version(&version).await
    }

    /// Restore every category concurrently under keys built from `version`.
    ///
    /// All three lookups run to completion even if one fails; any failure
    /// then fails the whole pass and no record is produced.
    pub async fn restore_with_version(&self, version: &str) -> Result<CacheHits> {
        let span = run_span("restore", version);
        async {
            let [iso, kic, preload] = self.keys(version);

            let (iso_result, kic_result, preload_result) = futures::join!(
                self.restore_one(&iso),
                self.restore_one(&kic),
                self.restore_one(&preload),
            );

            let hits = CacheHits {
                iso: iso_result?,
                kic: kic_result?,
                preload: preload_result?,
            };
            tracing::info!(
                iso = hits.iso,
                kic = hits.kic,
                preload = hits.preload,
                "restore finished"
            );
            Ok(hits)
        }
        .instrument(span)
        .await
    }

    #[instrument(level = "debug", skip(self), fields(category = %key.category))]
    async fn restore_one(&self, key: &CacheKey) -> Result<bool> {
        let matched = self
            .backend
            .restore(&key.key, &key.paths)
            .await
            .inspect_err(|e| tracing::warn!(key = %key, error = %e, "cache restore failed"))?;
        let hit = matched.is_some();
        cache_restored(key.category, &key.key, hit);
        Ok(hit)
    }

    /// Probe the version again, then save every category that missed
    pub async fn save(&self, hits: CacheHits) -> Result<Vec<ArtifactCategory>> {
        let version = self.probe_version().await?;
        self.save_with_version(&version, hits).await
    }

    /// Save every missed category in order, returning the categories saved.
    ///
    /// Hits are never re-saved. A failed save does not stop the remaining
    /// categories from being attempted; the pass then fails with a
    /// [`Error::SaveFailed`] naming every category that could not be saved.
    pub async fn save_with_version(
        &self,
        version: &str,
        hits: CacheHits,
    ) -> Result<Vec<ArtifactCategory>> {
        let span = run_span("save", version);
        async {
            let mut saved = Vec::new();
            let mut failed = Vec::new();
            let mut first_error: Option<Error> = None;

            for category in ArtifactCategory::ALL {
                if hits.is_hit(category) {
                    cache_skipped(category);
                }
            }

            for category in hits.misses() {
                let key = build_cache_key(category, version, &self.arch, self.config);
                match self.backend.save(&key.key, &key.paths).await {
                    Ok(()) => {
                        cache_saved(key.category, &key.key);
                        saved.push(key.category);
                    }
                    Err(e) => {
                        tracing::error!(category = %key.category, key = %key, error = %e, "cache save failed");
                        failed.push(key.category);
                        first_error.get_or_insert(e);
                    }
                }
            }

            match first_error {
                Some(error) => Err(Error::save_failed(failed, error)),
                None => Ok(saved),
            }
        }
        .instrument(span)
        .await
    }
}
