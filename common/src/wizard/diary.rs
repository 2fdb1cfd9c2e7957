use serde::{Deserialize, Serialize};

use crate::model::DiaryRequest;

/// The four per-diem screens, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiaryStep {
    Identity,
    Period,
    Beneficiaries,
    Review,
}

impl DiaryStep {
    pub const ALL: [DiaryStep; 4] = [
        DiaryStep::Identity,
        DiaryStep::Period,
        DiaryStep::Beneficiaries,
        DiaryStep::Review,
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

    pub fn is_complete(self, request: &DiaryRequest) -> bool {
        match self {
            DiaryStep::Identity => request.has_identity(),
            DiaryStep::Period => request.has_period(),
            DiaryStep::Beneficiaries => !request.beneficiaries.is_empty(),
            DiaryStep::Review => true,
        }
    }
}
