//! Multipart project form parsing
//!
//! Text parts fill [`ProjectFields`]; the `image` part is streamed into a
//! [`StagedImage`] while it is being received.

use axum::extract::Multipart;
use tracing::debug;

use crate::api::types::ApiError;
use crate::infrastructure::services::ProjectFields;
use crate::infrastructure::uploads::{ImageStore, StagedImage, UploadError};

/// Form field carrying the project image
pub const IMAGE_FIELD: &str = "image";

/// Parsed project form
#[derive(Debug, Default)]
pub struct ProjectForm {
    pub fields: ProjectFields,
    pub image: Option<StagedImage>,
}

impl ProjectForm {
    /// Reads every part. A staged image is dropped, and its temporary file
    /// removed, if any later part fails.
    pub async fn read(mut multipart: Multipart, images: &ImageStore) -> Result<Self, ApiError> {
        let max_bytes = images.max_file_size();
        let mut form = ProjectForm::default();

        while let Some(mut field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::from_multipart(e, max_bytes))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);

            if name != IMAGE_FIELD {
                if file_name.is_some() {
                    return Err(ApiError::bad_request(format!(
                        "Unexpected file in field '{}'",
                        name
                    ))
                    .with_param(name));
                }

                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::from_multipart(e, max_bytes))?;

                if !form.fields.set(&name, value) {
                    debug!(field = %name, "Ignoring unknown project form field");
                }
                continue;
            }

            // browsers submit an empty file part when nothing was chosen
            if file_name.as_deref().is_none_or(str::is_empty) {
                continue;
            }

            if form.image.is_some() {
                return Err(UploadError::MultipleFiles.into());
            }

            let content_type = field.content_type().map(str::to_string);
            let mut staged = images
                .stage(file_name.as_deref(), content_type.as_deref())
                .await?;

            while let Some(chunk) = field
                .chunk()
                .await
                .map_err(|e| ApiError::from_multipart(e, max_bytes))?
            {
                staged.write_chunk(&chunk).await?;
            }

            debug!(size = staged.size(), "Received project image");
            form.image = Some(staged);
        }

        Ok(form)
    }
}
