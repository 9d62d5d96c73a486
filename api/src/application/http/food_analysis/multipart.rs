use axum::extract::Multipart;
use bytes::Bytes;
use foodcheck_core::domain::{
    food_analysis::value_objects::AnalyzeUploadInput, upload::resolve_mime_type,
};
use tracing::{error, warn};

use crate::application::http::server::api_entities::api_error::ApiError;

/// Form fields accepted for the image, `file` as in the HTML form and
/// `image` for API clients.
const IMAGE_FIELDS: [&str; 2] = ["file", "image"];

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl From<UploadedImage> for AnalyzeUploadInput {
    fn from(image: UploadedImage) -> Self {
        Self {
            mime_type: resolve_mime_type(image.content_type.as_deref(), &image.filename),
            filename: image.filename,
            data: image.data,
        }
    }
}

/// Reads the image field out of a multipart form.
///
/// Returns `Ok(None)` when the form carries no file, which is what browsers
/// send when the user submits without choosing one: a file field with an
/// empty filename.
pub async fn read_image_field(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<Option<UploadedImage>, ApiError> {
    let mut image: Option<UploadedImage> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::from(e)
    })? {
        let name = field.name().unwrap_or("").to_string();
        if !IMAGE_FIELDS.contains(&name.as_str()) || image.is_some() {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let content_type = field.content_type().map(str::to_string);

        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read file bytes: {}", e);
            ApiError::from(e)
        })?;

        if filename.is_empty() {
            continue;
        }

        if data.len() > max_bytes {
            warn!(filename = %filename, size_bytes = data.len(), "Upload over size limit");
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                max_bytes
            )));
        }

        image = Some(UploadedImage {
            filename,
            content_type,
            data,
        });
    }

    Ok(image)
}
