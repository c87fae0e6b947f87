//! Room image storage on the local filesystem.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Errors that can occur while storing an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The multipart form was unreadable or had no usable `file` field.
    #[error("bad form: {0}")]
    BadForm(String),

    #[error("failed to create upload directory: {0}")]
    CreateDirectory(#[source] io::Error),

    #[error("failed to create file: {0}")]
    CreateFile(#[source] io::Error),

    #[error("failed to copy file contents: {0}")]
    Copy(#[source] io::Error),
}

/// Writes uploaded files into a single directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    directory: PathBuf,
}

impl UploadStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Store `contents` under the final path component of `file_name`.
    ///
    /// The directory is created on first use. An existing file with the same
    /// name is overwritten.
    pub async fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, UploadError> {
        let name = base_name(file_name)
            .ok_or_else(|| UploadError::BadForm(format!("invalid file name '{}'", file_name)))?;

        if !fs::try_exists(&self.directory).await.unwrap_or(false) {
            fs::create_dir_all(&self.directory)
                .await
                .map_err(UploadError::CreateDirectory)?;
            tracing::debug!(directory = ?self.directory, "Created upload directory");
        }

        let path = self.directory.join(name);
        let mut file = fs::File::create(&path)
            .await
            .map_err(UploadError::CreateFile)?;
        file.write_all(contents).await.map_err(UploadError::Copy)?;
        file.flush().await.map_err(UploadError::Copy)?;

        Ok(path)
    }
}

/// Last `/`-separated element of `file_name`, ignoring trailing slashes.
///
/// Only an empty name is refused here. A name that reduces to `.` or `..`
/// names a directory and fails later as `CreateFile`.
fn base_name(file_name: &str) -> Option<&str> {
    if file_name.is_empty() {
        return None;
    }
    let base = file_name
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    Some(if base.is_empty() { "." } else { base })
}
