// src/errors.rs
use thiserror::Error;

/// Every way a user action can be turned down or fail.
///
/// The first five variants are raised before any request leaves the client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please select a PDF file.")]
    InvalidFileType { content_type: String },

    #[error("Please select a file first.")]
    NoFileSelected,

    #[error("Please upload a resume first.")]
    ResumeRequired,

    #[error("Please enter a job description.")]
    JobDescriptionRequired,

    #[error("AI features are not available right now.")]
    LlmUnavailable,

    #[error("{0}")]
    Transport(#[from] anyhow::Error),

    #[error("{}", message.as_deref().unwrap_or("request was not successful"))]
    Backend { message: Option<String> },
}

impl ClientError {
    /// Message shown to the user for a failed request, falling back to
    /// `fallback` when the backend said nothing useful.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Backend { message: Some(m) } if !m.trim().is_empty() => m.clone(),
            ClientError::Backend { .. } => fallback.to_string(),
            ClientError::Transport(e) => format!("{:#}", e),
            other => other.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
