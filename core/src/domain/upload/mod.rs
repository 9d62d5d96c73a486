pub mod entities;
pub mod ports;

pub use entities::StoredUpload;
pub use ports::UploadStore;

const FALLBACK_IMAGE_MIME: &str = "image/jpeg";

/// Longest sanitized name that still fits `NAME_MAX` (255 bytes) once the
/// stored `<uuid>-` prefix is added.
pub const MAX_FILENAME_BYTES: usize = 255 - 37;

const MAX_EXTENSION_BYTES: usize = 16;

/// Reduces a client supplied filename to a single safe path component.
///
/// Directory parts and leading dots are stripped, control characters are
/// replaced and long names are cut to [`MAX_FILENAME_BYTES`] keeping the
/// extension. Returns `None` when nothing usable is left.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    let name = name.trim_start_matches('.');

    if name.is_empty() {
        return None;
    }

    let name: String = name
        .chars()
        .map(|c| if c.is_control() { '_' } else { c })
        .collect();

    Some(truncate_filename(name))
}

fn truncate_filename(name: String) -> String {
    if name.len() <= MAX_FILENAME_BYTES {
        return name;
    }

    let (stem, extension) = match name.rfind('.') {
        Some(dot) if dot > 0 && name.len() - dot <= MAX_EXTENSION_BYTES => name.split_at(dot),
        _ => (name.as_str(), ""),
    };

    let budget = MAX_FILENAME_BYTES - extension.len();
    let cut = (0..=budget.min(stem.len()))
        .rev()
        .find(|&i| stem.is_char_boundary(i))
        .unwrap_or(0);

    format!("{}{}", &stem[..cut], extension)
}

/// Picks the MIME type sent to the vision model.
///
/// The declared content type wins when it is an image type, otherwise the
/// filename extension is consulted, and `image/jpeg` is the last resort.
pub fn resolve_mime_type(content_type: Option<&str>, filename: &str) -> String {
    if let Some(content_type) = content_type.map(str::trim) {
        if content_type.starts_with("image/") {
            return content_type.to_string();
        }
    }

    mime_guess::from_path(filename)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| FALLBACK_IMAGE_MIME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_plain_names() {
        assert_eq!(sanitize_filename("food.jpg").as_deref(), Some("food.jpg"));
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_filename("C:\\Users\\me\\pizza.png").as_deref(),
            Some("pizza.png")
        );
    }

    #[test]
    fn sanitize_rejects_empty_and_dot_names() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename(".."), None);
        assert_eq!(sanitize_filename("photos/"), None);
        assert_eq!(sanitize_filename(".hidden").as_deref(), Some("hidden"));
    }

    #[test]
    fn sanitize_replaces_control_characters() {
        assert_eq!(sanitize_filename("a\nb.jpg").as_deref(), Some("a_b.jpg"));
    }

    #[test]
    fn sanitize_truncates_long_names_keeping_extension() {
        let raw = format!("{}.jpg", "a".repeat(246));
        assert_eq!(raw.len(), 250);

        let name = sanitize_filename(&raw).unwrap();

        assert_eq!(name.len(), MAX_FILENAME_BYTES);
        assert!(name.ends_with(".jpg"));
        assert_eq!(resolve_mime_type(None, &name), "image/jpeg");
    }

    #[test]
    fn sanitize_truncates_on_char_boundary() {
        let raw = format!("{}.png", "é".repeat(150));

        let name = sanitize_filename(&raw).unwrap();

        assert!(name.len() <= MAX_FILENAME_BYTES);
        assert!(name.ends_with(".png"));
        assert!(name.trim_end_matches(".png").chars().all(|c| c == 'é'));
    }

    #[test]
    fn sanitize_truncates_names_with_oversized_extension() {
        let raw = format!("photo.{}", "x".repeat(300));

        let name = sanitize_filename(&raw).unwrap();

        assert_eq!(name.len(), MAX_FILENAME_BYTES);
        assert!(name.starts_with("photo."));
    }

    #[test]
    fn mime_prefers_declared_image_type() {
        assert_eq!(resolve_mime_type(Some("image/png"), "x.jpg"), "image/png");
    }

    #[test]
    fn mime_falls_back_to_extension() {
        assert_eq!(
            resolve_mime_type(Some("application/octet-stream"), "x.webp"),
            "image/webp"
        );
        assert_eq!(resolve_mime_type(None, "x.png"), "image/png");
    }

    #[test]
    fn mime_defaults_to_jpeg() {
        assert_eq!(resolve_mime_type(None, "notes.txt"), "image/jpeg");
        assert_eq!(resolve_mime_type(None, "noext"), "image/jpeg");
    }
}
