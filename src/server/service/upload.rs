//! File storage for order attachments.

use std::path::{Path, PathBuf};

use axum::extract::multipart::Field;
use chrono::Utc;
use serde::Serialize;
use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

use crate::server::error::AppError;

/// Per-file size cap: 50 MB.
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Whole-request body cap: 250 MB.
pub const MAX_REQUEST_BYTES: usize = 262_144_000;

/// Which bucket an upload lands in.
///
/// Customer attachments go to the order root; staff deliverables go to the
/// `admin` subdirectory so the two sets stay distinguishable on disk and by URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pedido,
    Admin,
}

impl UploadKind {
    fn url_prefix(self) -> &'static str {
        match self {
            UploadKind::Pedido => "/uploads/pedidos",
            UploadKind::Admin => "/uploads/pedidos/admin",
        }
    }
}

/// Descriptor of a stored file, recorded in the order metadata blob.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedFile {
    /// Original client-supplied file name.
    pub name: String,
    /// Size on disk in bytes.
    pub size: u64,
    /// Declared content type.
    pub content_type: String,
    /// Site-relative URL under the static file root.
    pub url: String,
}

/// Stores uploaded files under the static web root.
///
/// Stored names are timestamp-plus-uuid so client names never touch the
/// filesystem; the original name survives only in the metadata blob.
#[derive(Clone)]
pub struct UploadStore {
    root: PathBuf,
    max_file_size: u64,
}

impl UploadStore {
    /// Creates a store rooted at `<web_root>/uploads/pedidos` with the 50 MB
    /// per-file cap.
    ///
    /// # Arguments
    /// - `web_root` - Static file root the URLs are served from
    ///
    /// # Returns
    /// - `UploadStore` - New store instance
    pub fn new(web_root: &Path) -> Self {
        Self::with_max_file_size(web_root, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a store with a custom per-file cap.
    ///
    /// # Arguments
    /// - `web_root` - Static file root the URLs are served from
    /// - `max_file_size` - Per-file cap in bytes
    ///
    /// # Returns
    /// - `UploadStore` - New store instance
    pub fn with_max_file_size(web_root: &Path, max_file_size: u64) -> Self {
        Self {
            root: web_root.join("uploads").join("pedidos"),
            max_file_size,
        }
    }

    /// Streams one multipart field to disk.
    ///
    /// The field is written chunk by chunk; the moment the running total would
    /// exceed the per-file cap the partial file is deleted and the request
    /// fails. Empty fields are skipped without leaving a file behind.
    ///
    /// # Arguments
    /// - `kind` - Target bucket
    /// - `field` - Multipart field positioned at this file
    ///
    /// # Returns
    /// - `Ok(Some(SavedFile))` - File stored; descriptor for the metadata blob
    /// - `Ok(None)` - Field was empty, nothing stored
    /// - `Err(AppError::BadRequest)` - File over the cap or a malformed body
    /// - `Err(AppError::IoErr)` - Filesystem failure
    pub async fn save_field(
        &self,
        kind: UploadKind,
        field: &mut Field<'_>,
    ) -> Result<Option<SavedFile>, AppError> {
        let original = field.file_name().unwrap_or("archivo").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let mut writer = self.begin(kind, &original).await?;

        loop {
            let chunk = field
                .chunk()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;

            match chunk {
                Some(bytes) => {
                    if !writer.write(&bytes).await? {
                        writer.discard().await;
                        return Err(too_large(&original));
                    }
                }
                None => break,
            }
        }

        if writer.written == 0 {
            writer.discard().await;
            return Ok(None);
        }

        let saved = writer.finish(kind, original, content_type).await?;
        tracing::debug!(name = %saved.name, size = saved.size, url = %saved.url, "Stored uploaded file");

        Ok(Some(saved))
    }

    /// Removes a previously stored file.
    ///
    /// Used when the surrounding request fails after its uploads already
    /// landed on disk. Removal failures are logged, not propagated; the
    /// caller is already unwinding an error.
    ///
    /// # Arguments
    /// - `file` - Descriptor returned by [`Self::save_field`]
    pub async fn remove(&self, file: &SavedFile) {
        let Some(relative) = file.url.strip_prefix("/uploads/pedidos/") else {
            return;
        };

        let path = self.root.join(relative);
        if let Err(e) = fs::remove_file(&path).await {
            tracing::warn!(path = %path.display(), "Failed to remove stored upload: {}", e);
        }
    }

    async fn begin(&self, kind: UploadKind, original: &str) -> Result<FileWriter, AppError> {
        let dir = match kind {
            UploadKind::Pedido => self.root.clone(),
            UploadKind::Admin => self.root.join("admin"),
        };
        fs::create_dir_all(&dir).await?;

        let stored_name = stored_name(original);
        let path = dir.join(&stored_name);
        let file = fs::File::create(&path).await?;

        Ok(FileWriter {
            file,
            path,
            stored_name,
            written: 0,
            max: self.max_file_size,
        })
    }
}

fn too_large(name: &str) -> AppError {
    AppError::BadRequest(format!("El archivo '{}' excede 50 MB.", name))
}

/// Builds the on-disk name: UTC timestamp to the millisecond, a random uuid,
/// and the original extension.
fn stored_name(original: &str) -> String {
    let ext = Path::new(original)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    format!(
        "{}_{}{}",
        Utc::now().format("%Y%m%d%H%M%S%3f"),
        Uuid::new_v4().simple(),
        ext
    )
}

/// Incremental writer for one file, tracking the running size against the cap.
struct FileWriter {
    file: fs::File,
    path: PathBuf,
    stored_name: String,
    written: u64,
    max: u64,
}

impl FileWriter {
    /// Appends a chunk. Returns false without writing when the chunk would
    /// push the file over the cap.
    async fn write(&mut self, bytes: &[u8]) -> Result<bool, AppError> {
        if self.written + bytes.len() as u64 > self.max {
            return Ok(false);
        }

        self.file.write_all(bytes).await?;
        self.written += bytes.len() as u64;

        Ok(true)
    }

    /// Drops the handle and removes the partial file.
    async fn discard(self) {
        drop(self.file);
        if let Err(e) = fs::remove_file(&self.path).await {
            tracing::warn!(path = %self.path.display(), "Failed to remove partial upload: {}", e);
        }
    }

    async fn finish(
        mut self,
        kind: UploadKind,
        original: String,
        content_type: String,
    ) -> Result<SavedFile, AppError> {
        self.file.flush().await?;

        Ok(SavedFile {
            name: original,
            size: self.written,
            content_type,
            url: format!("{}/{}", kind.url_prefix(), self.stored_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_name_keeps_extension_and_is_unique() {
        let first = stored_name("reporte final.PDF");
        let second = stored_name("reporte final.PDF");

        assert!(first.ends_with(".PDF"));
        assert_ne!(first, second);
    }

    #[test]
    fn stored_name_handles_missing_extension() {
        let name = stored_name("README");

        assert!(!name.contains('.'));
        assert!(name.contains('_'));
    }

    #[tokio::test]
    async fn file_at_exactly_the_cap_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::with_max_file_size(dir.path(), 8);

        let mut writer = store.begin(UploadKind::Pedido, "a.bin").await.unwrap();
        assert!(writer.write(&[0u8; 8]).await.unwrap());
        let saved = writer
            .finish(UploadKind::Pedido, "a.bin".to_string(), "application/octet-stream".to_string())
            .await
            .unwrap();

        assert_eq!(saved.size, 8);
        assert!(saved.url.starts_with("/uploads/pedidos/"));
        let on_disk = dir
            .path()
            .join("uploads/pedidos")
            .join(saved.url.rsplit('/').next().unwrap());
        assert!(on_disk.exists());
    }

    #[tokio::test]
    async fn file_over_the_cap_is_rejected_and_removed() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::with_max_file_size(dir.path(), 8);

        let mut writer = store.begin(UploadKind::Pedido, "b.bin").await.unwrap();
        assert!(writer.write(&[0u8; 5]).await.unwrap());
        assert!(!writer.write(&[0u8; 4]).await.unwrap());
        let path = writer.path.clone();
        writer.discard().await;

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn remove_deletes_a_stored_file_by_its_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::with_max_file_size(dir.path(), 64);

        let mut writer = store.begin(UploadKind::Pedido, "d.txt").await.unwrap();
        assert!(writer.write(b"hola").await.unwrap());
        let path = writer.path.clone();
        let saved = writer
            .finish(UploadKind::Pedido, "d.txt".to_string(), "text/plain".to_string())
            .await
            .unwrap();
        assert!(path.exists());

        store.remove(&saved).await;

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn admin_uploads_land_in_the_admin_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::with_max_file_size(dir.path(), 64);

        let mut writer = store.begin(UploadKind::Admin, "c.txt").await.unwrap();
        assert!(writer.write(b"listo").await.unwrap());
        let saved = writer
            .finish(UploadKind::Admin, "c.txt".to_string(), "text/plain".to_string())
            .await
            .unwrap();

        assert!(saved.url.starts_with("/uploads/pedidos/admin/"));
        assert!(dir.path().join("uploads/pedidos/admin").is_dir());
    }

    #[test]
    fn too_large_names_the_offending_file() {
        let err = too_large("video.mp4");

        match err {
            AppError::BadRequest(msg) => {
                assert_eq!(msg, "El archivo 'video.mp4' excede 50 MB.")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
