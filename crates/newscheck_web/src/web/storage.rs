use newscheck::config::ClientConfig;
use newscheck::session::{SessionError, SessionStore};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

pub(super) fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

/// Defaults, overlaid with the JSON saved under the config key (if any).
pub(super) fn load_client_config() -> ClientConfig {
    let raw = local_storage_get_string(super::LOCALSTORAGE_CONFIG_KEY);
    ClientConfig::with_overrides(raw.as_deref())
}

/// `window.sessionStorage`, the hand-off between the two pages.
pub(super) struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        session_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let storage = session_storage().ok_or(SessionError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| SessionError::Rejected(super::js_error_message(&e)))
    }
}
