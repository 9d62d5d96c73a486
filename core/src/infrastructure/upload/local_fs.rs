use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    upload::{entities::StoredUpload, ports::UploadStore},
};

/// Upload folder on the local filesystem.
///
/// Each file is prefixed with a UUID v7 so concurrent uploads sharing a
/// filename never overwrite each other.
#[derive(Debug, Clone)]
pub struct LocalUploadStore {
    root: PathBuf,
}

impl LocalUploadStore {
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();

        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            tracing::error!(path = %root.display(), "Failed to create upload folder: {}", e);
            CoreError::UploadStorageError(format!("cannot create {}: {}", root.display(), e))
        })?;

        tracing::info!(path = %root.display(), "Upload folder ready");

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl UploadStore for LocalUploadStore {
    #[instrument(skip(self, data), fields(size_bytes = data.len()))]
    async fn save(&self, filename: String, data: Bytes) -> Result<StoredUpload, CoreError> {
        let path = self.root.join(format!("{}-{}", generate_uuid_v7(), filename));

        tokio::fs::write(&path, &data).await.map_err(|e| {
            tracing::error!(path = %path.display(), "Failed to write upload: {}", e);
            CoreError::UploadStorageError(format!("cannot write {}: {}", path.display(), e))
        })?;

        Ok(StoredUpload {
            filename,
            path,
            size_bytes: data.len() as u64,
        })
    }

    #[instrument(skip(self), fields(path = %upload.path.display()))]
    async fn remove(&self, upload: StoredUpload) -> Result<(), CoreError> {
        match tokio::fs::remove_file(&upload.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::UploadStorageError(format!(
                "cannot remove {}: {}",
                upload.path.display(),
                e
            ))),
        }
    }
}
