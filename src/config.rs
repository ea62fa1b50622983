// src/config.rs
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:5001";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Client settings for one session against a SkillSnap backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend, without a trailing path.
    pub origin: String,
    pub api_prefix: String,
    pub notification_ttl_secs: u64,
    /// How many characters of an uploaded resume the preview shows.
    pub preview_chars: usize,
    pub accepted_content_type: String,
    /// Unset means the transport default applies.
    pub request_timeout_secs: Option<u64>,
    pub log_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            notification_ttl_secs: 5,
            preview_chars: 500,
            accepted_content_type: PDF_CONTENT_TYPE.to_string(),
            request_timeout_secs: None,
            log_file: PathBuf::from("/tmp/skillsnap.log"),
        }
    }
}

impl ClientConfig {
    pub fn new(origin: &str) -> Self {
        Self::default().with_origin(origin.to_string())
    }

    pub fn with_origin(mut self, origin: String) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_api_prefix(mut self, prefix: String) -> Self {
        self.api_prefix = prefix;
        self
    }

    pub fn with_notification_ttl(mut self, secs: u64) -> Self {
        self.notification_ttl_secs = secs;
        self
    }

    pub fn with_request_timeout(mut self, secs: Option<u64>) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = path;
        self
    }

    /// Origin plus API prefix, with exactly one slash between them.
    pub fn api_base_url(&self) -> String {
        let origin = self.origin.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            origin.to_string()
        } else {
            format!("{}/{}", origin, prefix)
        }
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_ttl_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_joins_origin_and_prefix() {
        let config = ClientConfig::new("http://localhost:5001/");
        assert_eq!(config.api_base_url(), "http://localhost:5001/api");

        let bare = ClientConfig::new("http://localhost:5001").with_api_prefix("".to_string());
        assert_eq!(bare.api_base_url(), "http://localhost:5001");

        let nested =
            ClientConfig::new("https://skills.example").with_api_prefix("/v2/api/".to_string());
        assert_eq!(nested.api_base_url(), "https://skills.example/v2/api");
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.notification_ttl(), Duration::from_secs(5));
        assert_eq!(config.accepted_content_type, PDF_CONTENT_TYPE);
        assert!(config.request_timeout().is_none());
    }
}
