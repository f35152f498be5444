//! File storage for uploaded rule documents.

use crate::error::{AppError, AppResult};
use crate::utils::file_extension;
use log::{info, warn};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Upload a file and hand back the URL it is publicly reachable at.
#[allow(async_fn_in_trait)]
pub trait FileStorage {
    async fn upload(&self, file_name: &str, bytes: &[u8]) -> AppResult<String>;
    /// Remove the file behind a public URL. Missing files are not an error.
    async fn remove(&self, public_url: &str) -> AppResult<()>;
}

/// Stores uploads in a local directory served under `public_base_url`.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Create the stored file as `<unix millis>.<original extension>`.
    /// Creation is exclusive; a taken name moves on to the next millisecond.
    async fn create_stored_file(&self, file_name: &str) -> AppResult<(String, File)> {
        let ext = file_extension(file_name)
            .ok_or_else(|| AppError::invalid_input(format!("File '{}' has no extension", file_name)))?;

        let mut millis = chrono::Utc::now().timestamp_millis();
        loop {
            let name = format!("{}.{}", millis, ext);
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.root.join(&name))
                .await
            {
                Ok(file) => return Ok((name, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => millis += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn name_from_url(public_url: &str) -> Option<&str> {
        public_url
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty() && *name != "." && *name != "..")
    }
}

impl FileStorage for LocalFileStorage {
    async fn upload(&self, file_name: &str, bytes: &[u8]) -> AppResult<String> {
        if bytes.is_empty() {
            return Err(AppError::invalid_input("Uploaded file is empty"));
        }

        tokio::fs::create_dir_all(&self.root).await?;

        let (stored_name, mut file) = self.create_stored_file(file_name).await?;
        let written = match file.write_all(bytes).await {
            Ok(()) => file.flush().await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            drop(file);
            if let Err(cleanup) = tokio::fs::remove_file(self.root.join(&stored_name)).await {
                warn!("[Storage] Failed to remove partial {}: {}", stored_name, cleanup);
            }
            return Err(e.into());
        }

        info!("[Storage] Stored {} ({} bytes) as {}", file_name, bytes.len(), stored_name);
        Ok(format!("{}/{}", self.public_base_url, stored_name))
    }

    async fn remove(&self, public_url: &str) -> AppResult<()> {
        let Some(name) = Self::name_from_url(public_url) else {
            warn!("[Storage] No file name in URL {}", public_url);
            return Ok(());
        };

        match tokio::fs::remove_file(self.root.join(name)).await {
            Ok(()) => {
                info!("[Storage] Removed {}", name);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("[Storage] {} was already gone", name);
                Ok(())
            }
            Err(e) => Err(AppError::storage(format!("Failed to remove {}: {}", name, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_upload_and_remove() {
        let dir = TempDir::new().unwrap();
        let storage = LocalFileStorage::new(dir.path(), "https://files.example.org/documents/");

        let url = storage.upload("Reglamento.PDF", b"%PDF-1.7").await.unwrap();
        assert!(url.starts_with("https://files.example.org/documents/"));
        assert!(url.ends_with(".pdf"));

        let name = LocalFileStorage::name_from_url(&url).unwrap();
        assert!(dir.path().join(name).exists());

        storage.remove(&url).await.unwrap();
        assert!(!dir.path().join(name).exists());
        // Second removal is a no-op.
        storage.remove(&url).await.unwrap();
    }

    #[tokio::test]
    async fn test_upload_rejects_bad_files() {
        let dir = TempDir::new().unwrap();
        let storage = LocalFileStorage::new(dir.path(), "https://files.example.org");

        assert!(matches!(storage.upload("rules.pdf", b"").await, Err(AppError::InvalidInput(_))));
        assert!(matches!(storage.upload("rules", b"data").await, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_uploads_never_overwrite() {
        let dir = TempDir::new().unwrap();
        let storage = LocalFileStorage::new(dir.path(), "https://files.example.org");

        let first = storage.upload("a.pdf", b"one").await.unwrap();
        let second = storage.upload("b.pdf", b"two").await.unwrap();
        assert_ne!(first, second);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_uploads_get_distinct_files() {
        let dir = TempDir::new().unwrap();
        let storage = Arc::new(LocalFileStorage::new(dir.path(), "https://files.example.org"));

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let storage = Arc::clone(&storage);
                tokio::spawn(async move {
                    let body = format!("doc{}", i);
                    let url = storage.upload("r.pdf", body.as_bytes()).await.unwrap();
                    (url, body)
                })
            })
            .collect();

        let mut urls = HashSet::new();
        for handle in handles {
            let (url, body) = handle.await.unwrap();
            let name = LocalFileStorage::name_from_url(&url).unwrap();
            assert_eq!(std::fs::read_to_string(dir.path().join(name)).unwrap(), body);
            urls.insert(url);
        }

        assert_eq!(urls.len(), 64);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 64);
    }

    #[test]
    fn test_name_from_url() {
        assert_eq!(LocalFileStorage::name_from_url("https://x.org/a/1.pdf"), Some("1.pdf"));
        assert_eq!(LocalFileStorage::name_from_url("https://x.org/a/"), None);
        assert_eq!(LocalFileStorage::name_from_url(".."), None);
    }
}
