//! The single session-scoped key that hands the last analysis from the
//! submission page to the results page.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::report::{AnalysisEnvelope, AnalysisReport};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage rejected the write: {0}")]
    Rejected(String),
}

/// Key/value storage scoped to one browser session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
}

/// In-process store, used by tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the stored response and returns its `result` report.
///
/// `None` when nothing is stored, the value is not JSON, or it has no object
/// `result`.
pub fn load_report<S: SessionStore + ?Sized>(store: &S, key: &str) -> Option<AnalysisReport> {
    let raw = store.get(key)?;
    let envelope: AnalysisEnvelope = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("stored analysis under {key:?} is not valid JSON: {}", e);
            return None;
        }
    };
    envelope.result
}
