//! Hands the cache hit record from the restore step to the save step

use minicache_core::{CacheHits, Error, Result};
use minicache_utils::write_atomic;
use std::fs;
use std::path::Path;

/// Persist `hits` as JSON at `path`
pub fn write_hits(path: &Path, hits: &CacheHits) -> Result<()> {
    let json = serde_json::to_vec(hits)?;
    write_atomic(path, &json)?;
    tracing::debug!(path = %path.display(), "wrote cache hit record");
    Ok(())
}

/// Read the record a previous restore left at `path`
pub fn read_hits(path: &Path) -> Result<CacheHits> {
    let content = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::configuration(format!(
                "no cache hit record at '{}'; run restore before save",
                path.display()
            ))
        } else {
            Error::file_system(path, "read cache hit record", e)
        }
    })?;
    Ok(serde_json::from_slice(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hits.json");
        let hits = CacheHits {
            iso: true,
            kic: false,
            preload: true,
        };

        write_hits(&path, &hits).unwrap();
        assert_eq!(read_hits(&path).unwrap(), hits);
    }

    #[test]
    fn test_missing_record_explains_itself() {
        let dir = TempDir::new().unwrap();
        let err = read_hits(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("run restore before save"));
    }

    #[test]
    fn test_malformed_record_is_a_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hits.json");
        fs::write(&path, r#"{"iso":"yes"}"#).unwrap();

        assert!(matches!(read_hits(&path).unwrap_err(), Error::Json { .. }));
    }
}
