//! Shared core of the PELD request portal: the request model, the wizard
//! state machine that drives the screens, and the CSV export.
//!
//! Nothing in this crate touches the DOM, so the whole flow can be exercised
//! with plain `cargo test`.

pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod model;
pub mod wizard;

pub use error::{ExportError, Result, WizardError};
pub use export::ExportFile;
pub use wizard::{Flow, RequestKind, Session};
