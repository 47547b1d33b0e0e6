use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use newscheck::config::ClientConfig;
use newscheck::form::FormState;
use newscheck::input::InputMode;
use newscheck::submit::{prepare, send};
use wasm_bindgen_futures::spawn_local;

use super::fetch::FetchTransport;
use super::storage::BrowserSession;

#[component]
pub(super) fn SubmitPage(config: ClientConfig) -> impl IntoView {
    let config = StoredValue::new(config);
    let form = RwSignal::new(FormState::new());
    let url_value = RwSignal::new(String::new());
    let text_value = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut proceed = false;
        form.update(|f| proceed = f.begin_submit());
        if !proceed {
            return;
        }

        let mode = form.with_untracked(FormState::mode);
        let raw = match mode {
            InputMode::Url => url_value.get_untracked(),
            InputMode::Text => text_value.get_untracked(),
        };

        // Rejected input is reported without touching the submit control.
        let cfg = config.get_value();
        let request = match prepare(&cfg, mode, &raw) {
            Ok(request) => request,
            Err(e) => {
                form.update(|f| f.fail(e.to_string()));
                return;
            }
        };

        form.update(FormState::start_loading);
        spawn_local(async move {
            match send(&cfg, request, &FetchTransport, &BrowserSession).await {
                Ok(nav) => {
                    if let Err(e) = super::navigate(&nav.href) {
                        form.update(|f| f.fail(e));
                    }
                }
                Err(e) => form.update(|f| f.fail(e.to_string())),
            }
        });
    };

    let mode_button = move |mode: InputMode| {
        view! {
            <button
                type="button"
                class=move || if form.with(|f| f.shows(mode)) { "switch active" } else { "switch" }
                on:click=move |_| form.update(|f| f.set_mode(mode))
            >
                {mode.icon()}" "{mode.display_name()}
            </button>
        }
    };

    view! {
        <section class="card">
            <div class="mode-switch">
                {mode_button(InputMode::Url)}
                {mode_button(InputMode::Text)}
            </div>

            {move || {
                form.with(|f| f.error().map(str::to_string))
                    .map(|msg| view! { <div class="error-message">{msg}</div> })
            }}

            <form id="checkForm" on:submit=on_submit>
                <div
                    id="urlInputGroup"
                    style:display=move || if form.with(|f| f.shows(InputMode::Url)) { "block" } else { "none" }
                >
                    <label for="articleUrl">"News article URL"</label>
                    <input
                        id="articleUrl"
                        name="articleUrl"
                        type="text"
                        inputmode="url"
                        placeholder="https://..."
                        required=move || form.with(|f| f.shows(InputMode::Url))
                        prop:value=move || url_value.get()
                        on:input=move |ev| url_value.set(event_target_value(&ev))
                    />
                </div>

                <div
                    id="textInputGroup"
                    style:display=move || if form.with(|f| f.shows(InputMode::Text)) { "block" } else { "none" }
                >
                    <label for="articleText">"Article text"</label>
                    <textarea
                        id="articleText"
                        name="articleText"
                        rows="10"
                        placeholder="Paste the article text here..."
                        required=move || form.with(|f| f.shows(InputMode::Text))
                        prop:value=move || text_value.get()
                        on:input=move |ev| text_value.set(event_target_value(&ev))
                    ></textarea>
                    <p class="hint">
                        {move || {
                            let min = config.with_value(|c| c.min_text_chars);
                            let have = text_value.with(|t| t.trim().chars().count());
                            format!("{have} / {min} characters minimum")
                        }}
                    </p>
                </div>

                <button
                    id="analyzeBtn"
                    type="submit"
                    class="btn primary"
                    disabled=move || form.with(FormState::is_loading)
                >
                    {move || {
                        let label = form.with(FormState::submit_label);
                        if form.with(FormState::is_loading) {
                            view! { <span class="spinner"></span>" "{label} }.into_any()
                        } else {
                            view! { <span class="btn-text">{label}</span> }.into_any()
                        }
                    }}
                </button>
            </form>
        </section>
    }
}
