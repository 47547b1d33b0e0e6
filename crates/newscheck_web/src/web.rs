use leptos::prelude::*;
use newscheck::config::ClientConfig;
use wasm_bindgen::{JsCast, JsValue};

use crate::page::Page;

mod console_log;
mod fetch;
mod results_page;
mod storage;
mod submit_page;

use results_page::ResultsPage;
use submit_page::SubmitPage;

const LOCALSTORAGE_CONFIG_KEY: &str = "newscheck.config.v1";

pub fn start() {
    console_log::init();

    let config = storage::load_client_config();
    let page = Page::from_path(&current_path(), &config.results_page);
    tracing::info!(page = page.label(), "mounting newscheck");

    mount_to_body(move || view! { <App config=config.clone() page=page /> });
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}

fn navigate(href: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window".to_string())?;
    window
        .location()
        .set_href(href)
        .map_err(|_| "navigation failed".to_string())
}

/// Best-effort message out of a rejected JS promise or thrown value.
fn js_error_message(v: &JsValue) -> String {
    if let Some(err) = v.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    v.as_string().unwrap_or_default()
}

#[component]
fn App(config: ClientConfig, page: Page) -> impl IntoView {
    set_document_title(page.title());

    view! {
        <main class="container">
            <header class="app-header">
                <h1 class="brand">"📰 NewsCheck"</h1>
                <p class="subtle">"Credibility analysis for Armenian and English news."</p>
            </header>
            {match page {
                Page::Submit => view! { <SubmitPage config=config /> }.into_any(),
                Page::Results => view! { <ResultsPage config=config /> }.into_any(),
            }}
        </main>
    }
}
