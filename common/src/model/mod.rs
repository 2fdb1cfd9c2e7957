//! Request model shared by the screens and the export.

pub mod beneficiary;
pub mod counter;
pub mod diary;
pub mod purchase;
pub mod urgency;

pub use beneficiary::{AccountType, Beneficiary, BeneficiaryDraft, BeneficiaryEdit};
pub use counter::Counter;
pub use diary::{DiaryEdit, DiaryRequest};
pub use purchase::{PurchaseEdit, PurchaseRequest};
pub use urgency::Urgency;
