//! # newscheck
//!
//! Host-testable core of the news credibility checker front end.
//!
//! The browser app has two pages: a form that posts an article URL or pasted
//! text to the analysis API, and a results page that renders the stored
//! response. Everything those pages decide lives here; the `newscheck_web`
//! crate only binds it to the DOM, `fetch`, and `sessionStorage`.
//!
//! ## Quick Start
//!
//! ```
//! use newscheck::prelude::*;
//!
//! let store = MemorySessionStore::new();
//! store
//!     .set(
//!         DEFAULT_SESSION_KEY,
//!         r#"{"status":"success","result":{"rag_indicator":"green","summary":"ok"}}"#,
//!     )
//!     .unwrap();
//!
//! let html = match load_report(&store, DEFAULT_SESSION_KEY) {
//!     Some(report) => render_report(&report),
//!     None => render_no_data(),
//! };
//! assert!(html.contains("High Trust"));
//! ```
//!
//! ## Modules
//!
//! - [`input`]: Input modes and validation
//! - [`form`]: Submission form state
//! - [`api`]: Request/response contract and the transport seam
//! - [`submit`]: The validate → POST → store → navigate flow
//! - [`session`]: Session-scoped hand-off between the two pages
//! - [`report`]: Defensive model of the analysis response
//! - [`render`]: Results page HTML
//! - [`config`]: Client configuration

pub mod api;
pub mod config;
pub mod error;
pub mod fmt;
pub mod form;
pub mod input;
pub mod render;
pub mod report;
pub mod session;
pub mod submit;

/// Prelude module for convenient imports.
///
/// ```
/// use newscheck::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{AnalyzeRequest, AnalyzeTransport, HttpReply, TransportError};
    pub use crate::config::{ClientConfig, DEFAULT_SESSION_KEY};
    pub use crate::error::SubmitError;
    pub use crate::form::FormState;
    pub use crate::input::InputMode;
    pub use crate::render::{render_no_data, render_report};
    pub use crate::report::{AnalysisEnvelope, AnalysisReport, Rag};
    pub use crate::session::{load_report, MemorySessionStore, SessionError, SessionStore};
    pub use crate::submit::{prepare, send, submit, Navigation};
}
