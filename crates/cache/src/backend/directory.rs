//! Cache backend that keeps entries as plain directories
//!
//! Layout: `<store>/<key>/<index>` holds a copy of the `index`-th path passed
//! to `save`. Lookups are exact-key only. This is meant for self-hosted
//! runners with a persistent disk, not as a general cache service.

use super::CacheBackend;
use async_trait::async_trait;
use minicache_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Longest key the hosted cache service accepts
const MAX_KEY_LENGTH: usize = 512;

/// Directory-backed [`CacheBackend`]
#[derive(Debug, Clone)]
pub struct DirectoryBackend {
    store_dir: PathBuf,
}

impl DirectoryBackend {
    pub fn new(store_dir: impl Into<PathBuf>) -> Self {
        Self {
            store_dir: store_dir.into(),
        }
    }

    fn entry_dir(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.store_dir.join(key))
    }
}

#[async_trait]
impl CacheBackend for DirectoryBackend {
    async fn restore(&self, key: &str, paths: &[PathBuf]) -> Result<Option<String>> {
        let entry = self.entry_dir(key)?;
        let matched = key.to_string();
        let paths = paths.to_vec();

        run_blocking("restore", key, move || {
            if !entry.is_dir() {
                return Ok(None);
            }
            for (index, path) in paths.iter().enumerate() {
                let stored = entry.join(index.to_string());
                if stored.exists() {
                    copy_path(&stored, path)?;
                }
            }
            Ok(Some(matched))
        })
        .await
    }

    async fn save(&self, key: &str, paths: &[PathBuf]) -> Result<()> {
        let entry = self.entry_dir(key)?;
        let staging = self
            .store_dir
            .join(format!(".staging-{key}-{}", std::process::id()));
        let paths = paths.to_vec();

        if let Some(missing) = paths.iter().find(|path| !path.exists()) {
            return Err(Error::backend(
                "save",
                key,
                format!("path '{}' does not exist", missing.display()),
            ));
        }

        run_blocking("save", key, move || {
            if staging.exists() {
                remove_path(&staging)?;
            }
            fs::create_dir_all(&staging)
                .map_err(|e| Error::file_system(&staging, "create directory", e))?;

            for (index, path) in paths.iter().enumerate() {
                copy_path(path, &staging.join(index.to_string()))?;
            }

            if entry.exists() {
                remove_path(&entry)?;
            }
            fs::rename(&staging, &entry).map_err(|e| Error::file_system(&entry, "rename", e))
        })
        .await
    }
}

/// Reject keys that cannot safely become a single directory name
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_key(key, "key is empty"));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(Error::invalid_key(
            key,
            format!("key is longer than {MAX_KEY_LENGTH} characters"),
        ));
    }
    if key.contains(',') {
        return Err(Error::invalid_key(key, "key cannot contain commas"));
    }
    if key.contains('/') || key.contains('\\') {
        return Err(Error::invalid_key(key, "key cannot contain path separators"));
    }
    if key.contains("..") {
        return Err(Error::invalid_key(key, "key cannot contain '..'"));
    }
    if key.starts_with('.') {
        return Err(Error::invalid_key(key, "key cannot start with '.'"));
    }
    Ok(())
}

async fn run_blocking<T, F>(operation: &'static str, key: &str, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        Error::backend_with_source(operation, key, "blocking task failed", e)
    })?
}

/// Copy a file or directory tree onto `dest`, overwriting files that exist
fn copy_path(src: &Path, dest: &Path) -> Result<()> {
    let metadata =
        fs::symlink_metadata(src).map_err(|e| Error::file_system(src, "read metadata", e))?;
    if !metadata.is_dir() {
        return copy_entry(src, dest, metadata.file_type().is_symlink());
    }

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            let io = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            Error::file_system(path, "walk directory", io)
        })?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| Error::file_system(&target, "create directory", e))?;
        } else {
            copy_entry(entry.path(), &target, entry.path_is_symlink())?;
        }
    }
    Ok(())
}

fn copy_entry(src: &Path, dest: &Path, is_symlink: bool) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::file_system(parent, "create directory", e))?;
    }

    if is_symlink {
        return copy_symlink(src, dest);
    }

    fs::copy(src, dest).map_err(|e| Error::file_system(src, "copy file", e))?;
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> Result<()> {
    let target = fs::read_link(src).map_err(|e| Error::file_system(src, "read link", e))?;
    if fs::symlink_metadata(dest).is_ok() {
        remove_path(dest)?;
    }
    std::os::unix::fs::symlink(&target, dest).map_err(|e| Error::file_system(dest, "create link", e))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).map_err(|e| Error::file_system(src, "copy file", e))?;
    Ok(())
}

fn remove_path(path: &Path) -> Result<()> {
    let result = if fs::symlink_metadata(path).map(|m| m.is_dir()).unwrap_or(false) {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| Error::file_system(path, "remove", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn test_restore_missing_key_is_a_miss() {
        let store = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let backend = DirectoryBackend::new(store.path());

        let result = backend
            .restore("iso-v1.32.0-x64", &[work.path().join("iso")])
            .await
            .unwrap();
        assert_eq!(result, None);
        assert!(!work.path().join("iso").exists());
    }

    #[tokio::test]
    async fn test_save_then_restore_round_trip() {
        let store = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let backend = DirectoryBackend::new(store.path());
        let cache_dir = work.path().join("cache/preload");
        write(&cache_dir.join("images.tar.lz4"), "layers");
        write(&cache_dir.join("nested/checksum"), "abc");

        backend
            .save("preload-v1-x64-stable-docker", &[cache_dir.clone()])
            .await
            .unwrap();

        fs::remove_dir_all(&cache_dir).unwrap();
        let restored = backend
            .restore("preload-v1-x64-stable-docker", &[cache_dir.clone()])
            .await
            .unwrap();

        assert_eq!(restored.as_deref(), Some("preload-v1-x64-stable-docker"));
        assert_eq!(fs::read_to_string(cache_dir.join("images.tar.lz4")).unwrap(), "layers");
        assert_eq!(fs::read_to_string(cache_dir.join("nested/checksum")).unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_save_replaces_existing_entry() {
        let store = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let backend = DirectoryBackend::new(store.path());
        let cache_dir = work.path().join("kic");

        write(&cache_dir.join("old"), "1");
        backend.save("kic-v1-x64", &[cache_dir.clone()]).await.unwrap();

        fs::remove_dir_all(&cache_dir).unwrap();
        write(&cache_dir.join("new"), "2");
        backend.save("kic-v1-x64", &[cache_dir.clone()]).await.unwrap();

        let entry = store.path().join("kic-v1-x64/0");
        assert!(entry.join("new").exists());
        assert!(!entry.join("old").exists());
    }

    #[tokio::test]
    async fn test_save_missing_path_fails() {
        let store = TempDir::new().unwrap();
        let backend = DirectoryBackend::new(store.path());

        let err = backend
            .save("iso-v1-x64", &[store.path().join("does-not-exist")])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Backend { .. }));
        assert!(!store.path().join("iso-v1-x64").exists());
    }

    #[tokio::test]
    async fn test_invalid_keys_are_rejected() {
        let store = TempDir::new().unwrap();
        let backend = DirectoryBackend::new(store.path());

        for key in [
            "",
            "../escape",
            "a/b",
            "a,b",
            ".hidden",
            "preload-v1-x64-..-docker",
        ] {
            let err = backend.restore(key, &[]).await.unwrap_err();
            assert!(matches!(err, Error::InvalidKey { .. }), "key {key:?}");
        }
        let long = "k".repeat(MAX_KEY_LENGTH + 1);
        assert!(backend.restore(&long, &[]).await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinks_are_preserved() {
        let store = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let backend = DirectoryBackend::new(store.path());
        let cache_dir = work.path().join("iso");
        write(&cache_dir.join("minikube-v1.32.0-amd64.iso"), "iso");
        std::os::unix::fs::symlink("minikube-v1.32.0-amd64.iso", cache_dir.join("current")).unwrap();

        backend.save("iso-v1-x64", &[cache_dir.clone()]).await.unwrap();
        fs::remove_dir_all(&cache_dir).unwrap();
        backend.restore("iso-v1-x64", &[cache_dir.clone()]).await.unwrap();

        let link = fs::read_link(cache_dir.join("current")).unwrap();
        assert_eq!(link, PathBuf::from("minikube-v1.32.0-amd64.iso"));
    }
}
