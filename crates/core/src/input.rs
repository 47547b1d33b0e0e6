//! Input modes and client-side validation.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SubmitError;

/// Minimum trimmed length of pasted article text.
pub const MIN_TEXT_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Url,
    Text,
}

impl InputMode {
    /// Wire name, as sent in the request's `type` field.
    pub fn label(self) -> &'static str {
        match self {
            InputMode::Url => "url",
            InputMode::Text => "text",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            InputMode::Url => "Article URL",
            InputMode::Text => "Paste Text",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            InputMode::Url => "🔗",
            InputMode::Text => "📝",
        }
    }

    pub fn all() -> &'static [InputMode] {
        &[InputMode::Url, InputMode::Text]
    }
}

/// True if `raw` parses as an absolute URL with an `http` or `https` scheme.
pub fn is_valid_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Trims `raw` and checks it against the rules for `mode`.
///
/// Returns the trimmed content that goes into the request body.
pub fn validate(mode: InputMode, raw: &str, min_text_chars: usize) -> Result<String, SubmitError> {
    let value = raw.trim();
    match mode {
        InputMode::Url => {
            if !is_valid_url(value) {
                return Err(SubmitError::InvalidUrl);
            }
        }
        InputMode::Text => {
            if value.chars().count() < min_text_chars {
                return Err(SubmitError::TextTooShort {
                    min_chars: min_text_chars,
                });
            }
        }
    }
    Ok(value.to_string())
}
