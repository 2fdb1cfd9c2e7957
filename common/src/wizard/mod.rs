//! Screen sequencing for both request flows.
//!
//! Each flow is a fixed list of named screens. A screen's gate decides
//! whether the "continue" action is available; [`Session`] owns the drafts
//! and applies the transitions.

pub mod diary;
pub mod flow;
pub mod purchase;
pub mod session;

pub use diary::DiaryStep;
pub use flow::{Flow, RequestKind};
pub use purchase::PurchaseStep;
pub use session::Session;
