use std::{collections::HashMap, fs};

use anyhow::Context;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

/// Layered resolution, later sources win: built-in default, `viewer.toml`,
/// then environment. The `--server-url` flag is applied on top in `main`.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("viewer.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_base_url") {
                settings.api_base_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("PLAN_API_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_URL") {
        settings.api_base_url = v;
    }

    settings
}

/// Rejects unusable base URLs up front and strips any trailing slash so the
/// fixed endpoint path can be appended verbatim.
pub fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    let parsed =
        Url::parse(raw).with_context(|| format!("invalid API base URL '{raw}'"))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("API base URL '{raw}' must use http or https");
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_http_base_url() {
        assert_eq!(
            normalize_base_url("http://127.0.0.1:8080").expect("valid url"),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://plan.example.com/").expect("valid url"),
            "https://plan.example.com"
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            normalize_base_url("  http://localhost:8080 ").expect("valid url"),
            "http://localhost:8080"
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(normalize_base_url("not a url").is_err());
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(normalize_base_url("ftp://plan.example.com").is_err());
    }
}
