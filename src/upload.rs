// src/upload.rs
use anyhow::{Context, Result};
use std::path::Path;

use crate::errors::{ClientError, ClientResult};
use crate::utils::content_type_for;

/// A file handed to the upload area, by browsing or by drag-and-drop.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    /// Declared MIME type, as the picker reported it.
    pub content_type: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            size: bytes.len() as u64,
            bytes,
        }
    }

    /// Read a file from disk, declaring its type from the extension.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();
        let content_type = content_type_for(&file_name);

        Ok(Self::new(&file_name, content_type, bytes))
    }

    pub fn size_mb(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

/// The drop zone. Selecting a file only stages it; sending is a separate step.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadArea {
    #[default]
    Prompt,
    Staged(ResumeFile),
}

impl UploadArea {
    /// Stage `file` if its declared type is `accepted`. A rejected file
    /// leaves the area as it was.
    pub fn select(&mut self, file: ResumeFile, accepted: &str) -> ClientResult<()> {
        if file.content_type != accepted {
            return Err(ClientError::InvalidFileType {
                content_type: file.content_type,
            });
        }
        *self = UploadArea::Staged(file);
        Ok(())
    }

    pub fn staged(&self) -> ClientResult<&ResumeFile> {
        match self {
            UploadArea::Staged(f) => Ok(f),
            UploadArea::Prompt => Err(ClientError::NoFileSelected),
        }
    }
}
