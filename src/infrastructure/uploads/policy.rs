//! Upload acceptance rules for project images

use std::path::Path;

use thiserror::Error;

/// Accepted declared content types
pub const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Accepted file name extensions
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Default per-file size cap (5 MB)
pub const DEFAULT_MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Upload errors
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File is too large. Maximum size is {}MB.", .max_bytes / (1024 * 1024))]
    TooLarge { max_bytes: usize },

    #[error("Only image files (jpeg, jpg, png, webp) are allowed")]
    UnsupportedType {
        file_name: Option<String>,
        content_type: Option<String>,
    },

    #[error("Only one image may be uploaded per request")]
    MultipleFiles,

    #[error("Invalid image reference '{0}'")]
    InvalidReference(String),

    #[error("Upload I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to store upload: {0}")]
    Persist(String),
}

impl UploadError {
    /// True when the client sent something unacceptable
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::TooLarge { .. } | Self::UnsupportedType { .. } | Self::MultipleFiles
        )
    }
}

/// Validates the declared type and the file name extension, returning the
/// normalized extension to store the file under
pub fn check_image_type(
    file_name: Option<&str>,
    content_type: Option<&str>,
) -> Result<String, UploadError> {
    let unsupported = || UploadError::UnsupportedType {
        file_name: file_name.map(str::to_string),
        content_type: content_type.map(str::to_string),
    };

    let declared = content_type
        .map(|ct| ct.split(';').next().unwrap_or_default().trim().to_lowercase())
        .ok_or_else(unsupported)?;

    if !ALLOWED_MIME_TYPES.contains(&declared.as_str()) {
        return Err(unsupported());
    }

    let extension = file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .ok_or_else(unsupported)?;

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(unsupported());
    }

    let guessed_is_allowed = mime_guess::from_ext(&extension)
        .iter()
        .any(|mime| ALLOWED_MIME_TYPES.contains(&mime.essence_str()));

    if !guessed_is_allowed {
        return Err(unsupported());
    }

    Ok(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_supported_images() {
        assert_eq!(
            check_image_type(Some("shot.PNG"), Some("image/png")).unwrap(),
            "png"
        );
        assert_eq!(
            check_image_type(Some("photo.jpeg"), Some("image/jpeg")).unwrap(),
            "jpeg"
        );
        assert_eq!(
            check_image_type(Some("photo.jpg"), Some("image/jpg")).unwrap(),
            "jpg"
        );
        assert_eq!(
            check_image_type(Some("hero.webp"), Some("image/webp; charset=binary")).unwrap(),
            "webp"
        );
    }

    #[test]
    fn test_rejects_wrong_content_type() {
        assert!(check_image_type(Some("doc.png"), Some("application/pdf")).is_err());
        assert!(check_image_type(Some("anim.gif"), Some("image/gif")).is_err());
        assert!(check_image_type(Some("shot.png"), None).is_err());
    }

    #[test]
    fn test_rejects_wrong_extension() {
        assert!(check_image_type(Some("script.php"), Some("image/png")).is_err());
        assert!(check_image_type(Some("noext"), Some("image/png")).is_err());
        assert!(check_image_type(None, Some("image/png")).is_err());
    }

    #[test]
    fn test_too_large_message() {
        let err = UploadError::TooLarge {
            max_bytes: DEFAULT_MAX_IMAGE_SIZE,
        };
        assert_eq!(err.to_string(), "File is too large. Maximum size is 5MB.");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_io_errors_are_server_side() {
        let err = UploadError::from(std::io::Error::other("disk full"));
        assert!(!err.is_client_error());
    }
}
