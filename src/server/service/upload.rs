//! Storage of uploaded review photos.
//!
//! Photos are written to the configured upload directory under a generated name
//! `<unix-millis>-<random hex>.<ext>` and served back under `/uploads/<name>`.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::server::error::AppError;

/// URL prefix the upload directory is served under.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

const FALLBACK_EXTENSION: &str = "bin";
const MAX_EXTENSION_LEN: usize = 8;

/// A photo received in a multipart request.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// File name supplied by the client, used only for its extension.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UploadService {
    dir: PathBuf,
}

impl UploadService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes a photo to the upload directory, creating the directory if needed.
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored photo
    /// - `Err(AppError::IoErr)` - Directory creation or write failed
    pub async fn save(&self, photo: PhotoUpload) -> Result<String, AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let extension = extension_for(photo.file_name.as_deref(), photo.content_type.as_deref());
        let file_name = format!(
            "{}-{:016x}.{}",
            Utc::now().timestamp_millis(),
            rand::random::<u64>(),
            extension
        );

        tokio::fs::write(self.dir.join(&file_name), &photo.bytes).await?;

        tracing::info!(
            "Stored uploaded photo {} ({} bytes)",
            file_name,
            photo.bytes.len()
        );

        Ok(format!("{}/{}", UPLOADS_URL_PREFIX, file_name))
    }

    /// Deletes a photo previously returned by `save`.
    ///
    /// URLs outside the upload prefix are ignored. A failed delete is logged, not returned.
    pub async fn remove(&self, url: &str) {
        let Some(file_name) = url
            .strip_prefix(UPLOADS_URL_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| !name.is_empty() && !name.contains(['/', '\\']) && *name != "..")
        else {
            return;
        };

        if let Err(e) = tokio::fs::remove_file(self.dir.join(file_name)).await {
            tracing::warn!("Failed to remove uploaded photo {}: {}", file_name, e);
        }
    }
}

/// Picks a safe file extension from the client file name, falling back to the content type.
fn extension_for(file_name: Option<&str>, content_type: Option<&str>) -> String {
    let from_name = file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| {
            !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        });

    if let Some(ext) = from_name {
        return ext;
    }

    match content_type {
        Some("image/jpeg") => "jpg",
        Some("image/png") => "png",
        Some("image/gif") => "gif",
        Some("image/webp") => "webp",
        Some("image/heic") => "heic",
        _ => FALLBACK_EXTENSION,
    }
    .to_string()
}
