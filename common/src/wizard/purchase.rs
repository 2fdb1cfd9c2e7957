use serde::{Deserialize, Serialize};

use crate::model::PurchaseRequest;

/// The six purchase screens, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseStep {
    Identity,
    Item,
    Links,
    Justification,
    Deadline,
    Review,
}

impl PurchaseStep {
    pub const ALL: [PurchaseStep; 6] = [
        PurchaseStep::Identity,
        PurchaseStep::Item,
        PurchaseStep::Links,
        PurchaseStep::Justification,
        PurchaseStep::Deadline,
        PurchaseStep::Review,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Whether the screen's required fields are filled in. The review screen
    /// has none.
    pub fn is_complete(self, request: &PurchaseRequest) -> bool {
        match self {
            PurchaseStep::Identity => request.has_identity(),
            PurchaseStep::Item => !request.item_name.is_empty(),
            PurchaseStep::Links => !request.links[0].is_empty(),
            PurchaseStep::Justification => !request.justification.is_empty(),
            PurchaseStep::Deadline => !request.limit_date.is_empty(),
            PurchaseStep::Review => true,
        }
    }
}
