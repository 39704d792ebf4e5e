//! Filesystem store for project images
//!
//! Uploads are written to a temporary file outside the served directory and
//! only moved to their public path by [`StagedImage::commit`]. Dropping a
//! staged image without committing deletes the temporary file.

use std::path::{Path, PathBuf};

use tempfile::TempPath;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use super::policy::{check_image_type, UploadError};

/// URL prefix under which committed images are served
pub const UPLOADS_URL_PREFIX: &str = "/uploads/projects/";

/// Stores project images below `<public_dir>/uploads/projects`
#[derive(Debug, Clone)]
pub struct ImageStore {
    directory: PathBuf,
    staging_directory: PathBuf,
    max_file_size: usize,
}

impl ImageStore {
    pub fn new(public_dir: impl AsRef<Path>, max_file_size: usize) -> Self {
        let public_dir = public_dir.as_ref();
        Self {
            directory: public_dir.join("uploads").join("projects"),
            staging_directory: public_dir.join(".staging"),
            max_file_size,
        }
    }

    /// Directory holding committed images
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    pub async fn ensure_directories(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.directory).await?;
        tokio::fs::create_dir_all(&self.staging_directory).await?;
        Ok(())
    }

    /// Validates type and extension, then opens a temporary file to stream the upload into
    pub async fn stage(
        &self,
        file_name: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<StagedImage, UploadError> {
        let extension = check_image_type(file_name, content_type)?;
        self.ensure_directories().await?;

        let staging_directory = self.staging_directory.clone();
        let temp = tokio::task::spawn_blocking(move || {
            tempfile::Builder::new()
                .prefix("upload-")
                .suffix(".part")
                .tempfile_in(staging_directory)
        })
        .await
        .map_err(|e| UploadError::Persist(e.to_string()))??;

        let (file, temp_path) = temp.into_parts();
        let stored_name = format!("project-{}.{}", Uuid::new_v4(), extension);

        debug!(file = %stored_name, "Staged image upload");

        Ok(StagedImage {
            file: File::from_std(file),
            temp_path,
            target: self.directory.join(&stored_name),
            image_url: format!("{}{}", UPLOADS_URL_PREFIX, stored_name),
            size: 0,
            max_size: self.max_file_size,
        })
    }

    /// Filesystem path of a stored image reference, if it is well formed
    pub fn path_for(&self, reference: &str) -> Option<PathBuf> {
        stored_file_name(reference).map(|name| self.directory.join(name))
    }

    /// Deletes a committed image. Returns false when the file was already gone.
    pub async fn remove(&self, reference: &str) -> Result<bool, UploadError> {
        let path = self
            .path_for(reference)
            .ok_or_else(|| UploadError::InvalidReference(reference.to_string()))?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Extracts the bare file name from `/uploads/projects/<file>` or a legacy
/// absolute URL ending in that path. Anything that could escape the upload
/// directory yields None.
pub fn stored_file_name(reference: &str) -> Option<&str> {
    let start = reference.rfind(UPLOADS_URL_PREFIX)? + UPLOADS_URL_PREFIX.len();
    let name = reference[start..]
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let unsafe_name = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    (!unsafe_name).then_some(name)
}

/// An upload being received. Removed on drop unless committed.
#[derive(Debug)]
pub struct StagedImage {
    file: File,
    temp_path: TempPath,
    target: PathBuf,
    image_url: String,
    size: usize,
    max_size: usize,
}

impl StagedImage {
    /// Appends bytes, failing once the total would exceed the size cap
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), UploadError> {
        if self.size + chunk.len() > self.max_size {
            return Err(UploadError::TooLarge {
                max_bytes: self.max_size,
            });
        }

        self.file.write_all(chunk).await?;
        self.size += chunk.len();
        Ok(())
    }

    /// Public path the image will have once committed
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Moves the file to its public location and returns its URL path
    pub async fn commit(mut self) -> Result<String, UploadError> {
        self.file.flush().await?;

        let StagedImage {
            file,
            temp_path,
            target,
            image_url,
            ..
        } = self;
        drop(file);

        tokio::task::spawn_blocking(move || temp_path.persist(&target))
            .await
            .map_err(|e| UploadError::Persist(e.to_string()))?
            .map_err(|e| UploadError::Io(e.error))?;

        debug!(image_url = %image_url, "Committed image upload");
        Ok(image_url)
    }
}
