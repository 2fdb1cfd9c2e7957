use serde::{Deserialize, Serialize};

use crate::wizard::{DiaryStep, PurchaseStep};

/// The two kinds of request the portal collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    Purchase,
    Diary,
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flow {
    #[default]
    Home,
    Purchase(PurchaseStep),
    Diary(DiaryStep),
    /// The request of this kind was exported.
    Success(RequestKind),
}

impl Flow {
    /// The first screen of a flow.
    pub fn start(kind: RequestKind) -> Self {
        match kind {
            RequestKind::Purchase => Flow::Purchase(PurchaseStep::Identity),
            RequestKind::Diary => Flow::Diary(DiaryStep::Identity),
        }
    }

    /// The request kind being filled in, if a wizard is active.
    pub fn kind(self) -> Option<RequestKind> {
        match self {
            Flow::Purchase(_) => Some(RequestKind::Purchase),
            Flow::Diary(_) => Some(RequestKind::Diary),
            Flow::Home | Flow::Success(_) => None,
        }
    }

    /// Review screens are the only place a request can be finalized.
    pub fn is_review(self) -> bool {
        matches!(
            self,
            Flow::Purchase(PurchaseStep::Review) | Flow::Diary(DiaryStep::Review)
        )
    }

    /// Zero-based position and screen count of the active wizard, for the
    /// progress indicator.
    pub fn progress(self) -> Option<(usize, usize)> {
        match self {
            Flow::Purchase(step) => Some((step.index(), PurchaseStep::ALL.len())),
            Flow::Diary(step) => Some((step.index(), DiaryStep::ALL.len())),
            Flow::Home | Flow::Success(_) => None,
        }
    }
}
