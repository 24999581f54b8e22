//! Per-run record of which categories were restored from cache

use super::artifact::ArtifactCategory;
use serde::{Deserialize, Serialize};

/// Whether each category's cache was found and restored.
///
/// Produced once by restore and consumed once by save. Serialized as a flat
/// JSON object so the record survives between the restore and save steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheHits {
    pub iso: bool,
    pub kic: bool,
    pub preload: bool,
}

impl CacheHits {
    #[must_use]
    pub fn is_hit(&self, category: ArtifactCategory) -> bool {
        match category {
            ArtifactCategory::Iso => self.iso,
            ArtifactCategory::Kic => self.kic,
            ArtifactCategory::Preload => self.preload,
        }
    }

    /// Categories that missed, in restore/save order
    pub fn misses(&self) -> impl Iterator<Item = ArtifactCategory> + '_ {
        ArtifactCategory::ALL
            .into_iter()
            .filter(move |category| !self.is_hit(*category))
    }
}
