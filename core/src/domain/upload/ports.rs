use std::future::Future;

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

use super::entities::StoredUpload;

/// Port for the upload folder
#[cfg_attr(test, mockall::automock)]
pub trait UploadStore: Send + Sync {
    /// Persist an upload under an already sanitized filename
    fn save(
        &self,
        filename: String,
        data: Bytes,
    ) -> impl Future<Output = Result<StoredUpload, CoreError>> + Send;

    /// Remove a previously saved upload
    fn remove(&self, upload: StoredUpload) -> impl Future<Output = Result<(), CoreError>> + Send;
}
