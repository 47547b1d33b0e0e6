//! One submission: validate, POST, store, navigate.

use tracing::{debug, info, warn};

use crate::api::{classify_reply, AnalyzeRequest, AnalyzeTransport};
use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::input::{self, InputMode};
use crate::session::SessionStore;

/// Where the browser should go once the result is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub href: String,
}

/// Checks `raw` input in `mode` and builds the request body.
///
/// Nothing is sent; callers show the error inline and keep the form idle.
pub fn prepare(
    config: &ClientConfig,
    mode: InputMode,
    raw: &str,
) -> Result<AnalyzeRequest, SubmitError> {
    match input::validate(mode, raw, config.min_text_chars) {
        Ok(content) => Ok(AnalyzeRequest::new(mode, content)),
        Err(e) => {
            debug!(mode = mode.label(), "input rejected: {}", e);
            Err(e)
        }
    }
}

/// Sends a prepared request. On success the response JSON is stored under
/// `config.session_key`.
pub async fn send<T, S>(
    config: &ClientConfig,
    request: AnalyzeRequest,
    transport: &T,
    store: &S,
) -> Result<Navigation, SubmitError>
where
    T: AnalyzeTransport,
    S: SessionStore + ?Sized,
{
    let mode = request.kind;
    let result = run(config, &request, transport, store).await;
    match &result {
        Ok(nav) => info!(href = %nav.href, "analysis stored"),
        Err(e) => warn!(mode = mode.label(), "analysis failed: {}", e),
    }
    result
}

/// Runs a whole submission: [`prepare`] then [`send`].
///
/// Invalid input is rejected before any request is made.
pub async fn submit<T, S>(
    config: &ClientConfig,
    mode: InputMode,
    raw: &str,
    transport: &T,
    store: &S,
) -> Result<Navigation, SubmitError>
where
    T: AnalyzeTransport,
    S: SessionStore + ?Sized,
{
    let request = prepare(config, mode, raw)?;
    send(config, request, transport, store).await
}

async fn run<T, S>(
    config: &ClientConfig,
    request: &AnalyzeRequest,
    transport: &T,
    store: &S,
) -> Result<Navigation, SubmitError>
where
    T: AnalyzeTransport,
    S: SessionStore + ?Sized,
{
    let body = serde_json::to_string(request).map_err(|e| SubmitError::network(e.to_string()))?;

    info!(
        mode = request.kind.label(),
        endpoint = %config.api_endpoint,
        "submitting article for analysis"
    );
    let reply = transport
        .post_json(&config.api_endpoint, &body)
        .await
        .map_err(|e| SubmitError::network(e.0))?;
    debug!(status = reply.status, bytes = reply.body.len(), "analysis reply");

    let value = classify_reply(&reply)?;
    store.set(&config.session_key, &value.to_string())?;

    Ok(Navigation {
        href: config.results_page.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::{HttpReply, TransportError};
    use crate::error::{DEFAULT_API_ERROR_MESSAGE, DEFAULT_FAILURE_MESSAGE};
    use crate::session::{MemorySessionStore, SessionError};

    /// Answers every request with one canned outcome and records what was sent.
    struct Scripted {
        reply: Result<HttpReply, TransportError>,
        sent: RefCell<Vec<(String, String)>>,
    }

    impl Scripted {
        fn reply(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpReply::new(status, body)),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn unreachable(message: &str) -> Self {
            Self {
                reply: Err(TransportError(message.to_string())),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl AnalyzeTransport for Scripted {
        async fn post_json(&self, url: &str, body: &str) -> Result<HttpReply, TransportError> {
            self.sent
                .borrow_mut()
                .push((url.to_string(), body.to_string()));
            self.reply.clone()
        }
    }

    struct ReadOnlyStore;

    impl SessionStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
            Err(SessionError::Rejected("QuotaExceededError".into()))
        }
    }

    fn run_submit(
        mode: InputMode,
        raw: &str,
        transport: &Scripted,
        store: &MemorySessionStore,
    ) -> Result<Navigation, SubmitError> {
        let cfg = ClientConfig::default();
        pollster::block_on(submit(&cfg, mode, raw, transport, store))
    }

    #[test]
    fn success_stores_response_and_navigates() {
        let t = Scripted::reply(200, r#"{"status":"success","result":{"summary":"ok"}}"#);
        let store = MemorySessionStore::new();

        let nav = run_submit(InputMode::Url, " https://hetq.am/a ", &t, &store).unwrap();

        assert_eq!(nav.href, "results.html");
        let stored: serde_json::Value =
            serde_json::from_str(&store.get("analysisResult").unwrap()).unwrap();
        assert_eq!(stored["result"]["summary"], "ok");

        let sent = t.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, ClientConfig::default().api_endpoint);
        let body: serde_json::Value = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"type": "url", "content": "https://hetq.am/a"})
        );
    }

    #[test]
    fn text_mode_sends_trimmed_text() {
        let t = Scripted::reply(200, "{}");
        let store = MemorySessionStore::new();
        let text = format!("  {}  ", "Լուր ".repeat(12));

        run_submit(InputMode::Text, &text, &t, &store).unwrap();

        let body: serde_json::Value = serde_json::from_str(&t.sent.borrow()[0].1).unwrap();
        assert_eq!(body["type"], "text");
        assert_eq!(body["content"], text.trim());
    }

    #[test]
    fn invalid_input_never_hits_the_network() {
        let t = Scripted::reply(200, "{}");
        let store = MemorySessionStore::new();

        let err = run_submit(InputMode::Url, "hetq.am/a", &t, &store).unwrap_err();
        assert_eq!(err, SubmitError::InvalidUrl);

        let err = run_submit(InputMode::Text, "too short", &t, &store).unwrap_err();
        assert_eq!(err, SubmitError::TextTooShort { min_chars: 50 });

        assert!(t.sent.borrow().is_empty());
        assert!(store.get("analysisResult").is_none());
    }

    #[test]
    fn prepare_builds_trimmed_request_or_rejects() {
        let cfg = ClientConfig::default();

        let req = prepare(&cfg, InputMode::Url, "  https://hetq.am/a\n").unwrap();
        assert_eq!(req, AnalyzeRequest::new(InputMode::Url, "https://hetq.am/a"));

        assert_eq!(
            prepare(&cfg, InputMode::Url, "ftp://hetq.am/a").unwrap_err(),
            SubmitError::InvalidUrl
        );
        assert_eq!(
            prepare(&cfg, InputMode::Text, "   ").unwrap_err(),
            SubmitError::TextTooShort { min_chars: 50 }
        );
    }

    #[test]
    fn send_posts_a_prepared_request() {
        let t = Scripted::reply(200, r#"{"result":{"summary":"ok"}}"#);
        let store = MemorySessionStore::new();
        let cfg = ClientConfig::default();
        let req = prepare(&cfg, InputMode::Url, "https://hetq.am/a").unwrap();

        let nav = pollster::block_on(send(&cfg, req, &t, &store)).unwrap();

        assert_eq!(nav.href, "results.html");
        assert_eq!(t.sent.borrow().len(), 1);
        assert!(store.get("analysisResult").is_some());
    }

    #[test]
    fn non_2xx_surfaces_error_field() {
        let t = Scripted::reply(400, r#"{"error":"Failed to scrape article"}"#);
        let store = MemorySessionStore::new();

        let err = run_submit(InputMode::Url, "https://hetq.am/a", &t, &store).unwrap_err();
        assert_eq!(err.to_string(), "Failed to scrape article");
        assert!(store.get("analysisResult").is_none());
    }

    #[test]
    fn non_2xx_without_error_field_uses_default() {
        let t = Scripted::reply(502, "Bad Gateway");
        let store = MemorySessionStore::new();

        let err = run_submit(InputMode::Url, "https://hetq.am/a", &t, &store).unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_API_ERROR_MESSAGE);
    }

    #[test]
    fn transport_failure_is_shown() {
        let store = MemorySessionStore::new();

        let t = Scripted::unreachable("Failed to fetch");
        let err = run_submit(InputMode::Url, "https://hetq.am/a", &t, &store).unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch");

        let t = Scripted::unreachable("");
        let err = run_submit(InputMode::Url, "https://hetq.am/a", &t, &store).unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn empty_result_is_rejected() {
        let t = Scripted::reply(200, "null");
        let store = MemorySessionStore::new();

        let err = run_submit(InputMode::Url, "https://hetq.am/a", &t, &store).unwrap_err();
        assert_eq!(err, SubmitError::EmptyResult);
        assert!(store.get("analysisResult").is_none());
    }

    #[test]
    fn storage_failure_is_reported() {
        let t = Scripted::reply(200, "{}");
        let cfg = ClientConfig::default();

        let err = pollster::block_on(submit(
            &cfg,
            InputMode::Url,
            "https://hetq.am/a",
            &t,
            &ReadOnlyStore,
        ))
        .unwrap_err();
        assert!(matches!(err, SubmitError::Storage(_)));
        assert_eq!(err.to_string(), "Could not save the analysis result.");
    }

    #[test]
    fn custom_config_is_honoured() {
        let t = Scripted::reply(200, "{}");
        let store = MemorySessionStore::new();
        let cfg = ClientConfig {
            api_endpoint: "https://api.example.org/analyze".into(),
            results_page: "/report".into(),
            session_key: "lastAnalysis".into(),
            min_text_chars: 10,
        };

        let nav = pollster::block_on(submit(
            &cfg,
            InputMode::Text,
            "ten chars!",
            &t,
            &store,
        ))
        .unwrap();

        assert_eq!(nav.href, "/report");
        assert!(store.get("lastAnalysis").is_some());
        assert_eq!(t.sent.borrow()[0].0, "https://api.example.org/analyze");
    }
}
