//! File-system access used by the batch renamer.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tracing::warn;

/// Directory listing, reading and renaming.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Names of the entries in `dir`.
    async fn list(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Raw bytes of a document.
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Rename a document in a single file-system operation.
    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// [`DocumentStore`] backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

#[async_trait]
impl DocumentStore for FsStore {
    async fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => warn!("Skipping non UTF-8 file name {:?}", name),
            }
        }

        Ok(names)
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        tokio::fs::rename(from, to).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fs_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.pdf"), b"bytes").unwrap();

        let store = FsStore;
        assert_eq!(store.list(dir.path()).await.unwrap(), vec!["a.pdf".to_string()]);
        assert_eq!(store.read(&dir.path().join("a.pdf")).await.unwrap(), b"bytes");

        store
            .rename(&dir.path().join("a.pdf"), &dir.path().join("b.pdf"))
            .await
            .unwrap();
        assert!(!dir.path().join("a.pdf").exists());
        assert!(dir.path().join("b.pdf").exists());
    }

    #[tokio::test]
    async fn test_list_missing_directory() {
        let dir = tempfile::tempdir().unwrap();

        let err = FsStore.list(&dir.path().join("missing")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
