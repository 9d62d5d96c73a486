use std::path::PathBuf;

/// An image written to the upload folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Sanitized name the client sent.
    pub filename: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}
