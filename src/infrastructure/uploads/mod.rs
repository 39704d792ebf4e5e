//! Upload infrastructure - image validation and storage

mod image_store;
mod policy;

pub use image_store::{stored_file_name, ImageStore, StagedImage, UPLOADS_URL_PREFIX};
pub use policy::{
    check_image_type, UploadError, ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES, DEFAULT_MAX_IMAGE_SIZE,
};
