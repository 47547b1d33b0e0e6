//! Which page the bundle should mount.
//!
//! One WASM bundle serves both `index.html` and the results page. Keeping the
//! routing out of the wasm-only `web` module lets us unit-test it on the host.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Submit,
    Results,
}

impl Page {
    /// Picks `Results` when the last path segment names the results page,
    /// with or without its `.html` extension.
    pub fn from_path(path: &str, results_page: &str) -> Page {
        let want = last_segment(results_page);
        if want.is_empty() {
            return Page::Submit;
        }
        let got = last_segment(path);
        if got == want || got == strip_html(want) {
            Page::Results
        } else {
            Page::Submit
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Submit => "submit",
            Page::Results => "results",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Submit => "Check a News Article",
            Page::Results => "Analysis Results",
        }
    }
}

fn last_segment(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}

fn strip_html(segment: &str) -> &str {
    segment.strip_suffix(".html").unwrap_or(segment)
}
