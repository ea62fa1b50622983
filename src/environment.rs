// src/environment.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::ClientConfig;

pub const DEFAULT_CONFIG_FILE: &str = "skillsnap.yaml";

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: ClientConfig,
    #[serde(default)]
    production: ClientConfig,
}

/// Name of the active environment (`local` unless told otherwise).
pub fn get_environment() -> String {
    std::env::var("SKILLSNAP_ENV")
        .or_else(|_| std::env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "local".to_string())
}

/// Load client configuration.
///
/// An explicit `path` must exist. Without one, `skillsnap.yaml` in the
/// current directory is used when present, defaults otherwise. Environment
/// overrides apply last.
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig> {
    let environment = get_environment();

    let config = match path {
        Some(p) => load_from_file(p, &environment)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load_from_file(&default_path, &environment)?
            } else {
                ClientConfig::default()
            }
        }
    };

    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

fn load_from_file(path: &Path, environment: &str) -> Result<ClientConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content, environment)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn parse_config(content: &str, environment: &str) -> Result<ClientConfig> {
    let file: ConfigFile = serde_yaml::from_str(content)?;
    Ok(match environment {
        "production" => file.production,
        _ => file.local,
    })
}

fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(origin) = lookup("SKILLSNAP_ORIGIN") {
        config = config.with_origin(origin);
    }
    if let Some(prefix) = lookup("SKILLSNAP_API_PREFIX") {
        config = config.with_api_prefix(prefix);
    }
    if let Some(secs) = lookup("SKILLSNAP_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
        config = config.with_request_timeout(Some(secs));
    }
    if let Some(secs) = lookup("SKILLSNAP_NOTIFICATION_TTL_SECS").and_then(|s| s.parse().ok()) {
        config = config.with_notification_ttl(secs);
    }
    if let Some(path) = lookup("SKILLSNAP_LOG_FILE") {
        config = config.with_log_file(PathBuf::from(path));
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
local:
  origin: "http://127.0.0.1:5001"
production:
  origin: "https://skillsnap.example"
  api_prefix: "/api"
  notification_ttl_secs: 8
"#;

    #[test]
    fn picks_section_by_environment() {
        let local = parse_config(SAMPLE, "local").unwrap();
        assert_eq!(local.origin, "http://127.0.0.1:5001");
        assert_eq!(local.notification_ttl_secs, 5);

        let prod = parse_config(SAMPLE, "production").unwrap();
        assert_eq!(prod.origin, "https://skillsnap.example");
        assert_eq!(prod.notification_ttl_secs, 8);
        assert_eq!(prod.preview_chars, 500);
    }

    #[test]
    fn unknown_environment_falls_back_to_local() {
        let cfg = parse_config(SAMPLE, "staging").unwrap();
        assert_eq!(cfg.origin, "http://127.0.0.1:5001");
    }

    #[test]
    fn env_overrides_win() {
        let cfg = apply_env_overrides(ClientConfig::default(), |key| match key {
            "SKILLSNAP_ORIGIN" => Some("http://backend:9000".to_string()),
            "SKILLSNAP_TIMEOUT_SECS" => Some("30".to_string()),
            "SKILLSNAP_NOTIFICATION_TTL_SECS" => Some("8".to_string()),
            "SKILLSNAP_LOG_FILE" => Some("/var/log/skillsnap.log".to_string()),
            _ => None,
        });
        assert_eq!(cfg.origin, "http://backend:9000");
        assert_eq!(cfg.api_prefix, "/api");
        assert_eq!(cfg.request_timeout_secs, Some(30));
        assert_eq!(cfg.notification_ttl_secs, 8);
        assert_eq!(cfg.log_file, PathBuf::from("/var/log/skillsnap.log"));
    }

    #[test]
    fn unparsable_numbers_are_ignored() {
        let cfg = apply_env_overrides(ClientConfig::default(), |key| match key {
            "SKILLSNAP_TIMEOUT_SECS" => Some("soon".to_string()),
            _ => None,
        });
        assert!(cfg.request_timeout_secs.is_none());
    }
}
