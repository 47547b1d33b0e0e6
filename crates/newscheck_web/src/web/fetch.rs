use newscheck::api::{AnalyzeTransport, HttpReply, TransportError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `window.fetch` as the analysis transport.
pub(super) struct FetchTransport;

impl AnalyzeTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpReply, TransportError> {
        fetch_post_json(url, body).await.map_err(TransportError)
    }
}

async fn fetch_post_json(url: &str, body: &str) -> Result<HttpReply, String> {
    let window = web_sys::window().ok_or("no window".to_string())?;

    let headers =
        web_sys::Headers::new().map_err(|_| "fetch: failed to create headers".to_string())?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| "fetch: failed to set content type".to_string())?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web_sys::RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = web_sys::Request::new_with_str_and_init(url, &init)
        .map_err(|e| super::js_error_message(&e))?;

    // Rejects only when no response arrived at all (offline, CORS, refused).
    let resp = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| super::js_error_message(&e))?;
    let resp = resp
        .dyn_into::<web_sys::Response>()
        .map_err(|_| "fetch: unexpected response type".to_string())?;

    let status = resp.status();
    let text = resp
        .text()
        .map_err(|_| "fetch: text() threw".to_string())?;
    let text = wasm_bindgen_futures::JsFuture::from(text)
        .await
        .map_err(|e| super::js_error_message(&e))?;

    Ok(HttpReply {
        status,
        body: text.as_string().unwrap_or_default(),
    })
}
