use serde::{Deserialize, Serialize};

use crate::input::MIN_TEXT_CHARS;

/// Endpoint baked in at build time; set `NEWSCHECK_API_ENDPOINT` when deploying.
pub const DEFAULT_API_ENDPOINT: &str = match option_env!("NEWSCHECK_API_ENDPOINT") {
    Some(v) => v,
    None => "http://localhost:5000/api/analyze",
};

pub const DEFAULT_RESULTS_PAGE: &str = "results.html";
pub const DEFAULT_SESSION_KEY: &str = "analysisResult";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    #[serde(default = "default_results_page")]
    pub results_page: String,
    #[serde(default = "default_session_key")]
    pub session_key: String,
    #[serde(default = "default_min_text_chars")]
    pub min_text_chars: usize,
}

fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_results_page() -> String {
    DEFAULT_RESULTS_PAGE.to_string()
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

fn default_min_text_chars() -> usize {
    MIN_TEXT_CHARS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            results_page: default_results_page(),
            session_key: default_session_key(),
            min_text_chars: default_min_text_chars(),
        }
    }
}

impl ClientConfig {
    /// Parses a (possibly partial) JSON object; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Defaults overlaid with `raw`, if present and valid. Invalid JSON is
    /// logged and ignored.
    pub fn with_overrides(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(cfg) => {
                tracing::info!(endpoint = %cfg.api_endpoint, "loaded client config overrides");
                cfg
            }
            Err(e) => {
                tracing::warn!("ignoring invalid client config overrides: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployed_pages() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.results_page, "results.html");
        assert_eq!(cfg.session_key, "analysisResult");
        assert_eq!(cfg.min_text_chars, 50);
        assert!(cfg.api_endpoint.starts_with("http"));
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let cfg = ClientConfig::from_json(r#"{"api_endpoint":"https://api.example.org/analyze"}"#)
            .unwrap();
        assert_eq!(cfg.api_endpoint, "https://api.example.org/analyze");
        assert_eq!(cfg.session_key, DEFAULT_SESSION_KEY);
        assert_eq!(cfg.min_text_chars, MIN_TEXT_CHARS);
    }

    #[test]
    fn invalid_overrides_fall_back_to_defaults() {
        assert_eq!(
            ClientConfig::with_overrides(Some("{not json")),
            ClientConfig::default()
        );
        assert_eq!(ClientConfig::with_overrides(None), ClientConfig::default());
    }
}
