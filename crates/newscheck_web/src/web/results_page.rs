use leptos::prelude::*;
use newscheck::config::ClientConfig;
use newscheck::render::{render_no_data, render_report};
use newscheck::session::load_report;

use super::storage::BrowserSession;

#[component]
pub(super) fn ResultsPage(config: ClientConfig) -> impl IntoView {
    let html = match load_report(&BrowserSession, &config.session_key) {
        Some(report) => {
            tracing::info!(rag = report.rag().label(), "rendering stored analysis");
            render_report(&report)
        }
        None => {
            tracing::warn!(key = %config.session_key, "no stored analysis");
            render_no_data()
        }
    };

    view! {
        <section class="card">
            <div id="resultsSection" inner_html=html></div>
            <p class="back-link">
                <a href="index.html">"← Check another article"</a>
            </p>
        </section>
    }
}
