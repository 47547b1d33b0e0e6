//! State behind the submission form.
//!
//! The web crate keeps one `FormState` in a signal and derives the DOM from it:
//! which input group is visible, which field is `required`, the submit button's
//! label and disabled flag, and the single inline error message.

use crate::input::InputMode;

pub const SUBMIT_LABEL: &str = "Analyze Credibility";
pub const LOADING_LABEL: &str = "Analyzing...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    mode: InputMode,
    loading: bool,
    error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switches the active input group and clears any shown error.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.error = None;
    }

    /// Whether the group for `mode` is visible (and its field required).
    pub fn shows(&self, mode: InputMode) -> bool {
        self.mode == mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a submission attempt. Returns false while a request is in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.error = None;
        true
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Shows `message` as the only error and re-enables the submit control.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_url_mode_and_idle() {
        let f = FormState::new();
        assert_eq!(f.mode(), InputMode::Url);
        assert!(f.shows(InputMode::Url));
        assert!(!f.shows(InputMode::Text));
        assert!(!f.is_loading());
        assert_eq!(f.submit_label(), SUBMIT_LABEL);
        assert_eq!(f.error(), None);
    }

    #[test]
    fn switching_mode_clears_error() {
        let mut f = FormState::new();
        f.fail("Please enter a valid news URL.");
        f.set_mode(InputMode::Text);
        assert!(f.shows(InputMode::Text));
        assert_eq!(f.error(), None);
    }

    #[test]
    fn loading_blocks_second_submit() {
        let mut f = FormState::new();
        assert!(f.begin_submit());
        f.start_loading();
        assert_eq!(f.submit_label(), LOADING_LABEL);
        assert!(!f.begin_submit());
    }

    #[test]
    fn failure_reenables_and_replaces_previous_error() {
        let mut f = FormState::new();
        f.fail("first");
        assert!(f.begin_submit());
        assert_eq!(f.error(), None);
        f.start_loading();
        f.fail("second");
        assert!(!f.is_loading());
        assert_eq!(f.error(), Some("second"));
        assert_eq!(f.submit_label(), SUBMIT_LABEL);
    }
}
