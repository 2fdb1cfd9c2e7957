//! People receiving per-diem allowances, and the staging draft used to add
//! them one at a time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::config::PER_DIEM_RATE;
use crate::model::Counter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
}

impl AccountType {
    pub const ALL: [AccountType; 2] = [AccountType::Checking, AccountType::Savings];

    pub fn label(self) -> &'static str {
        match self {
            AccountType::Checking => "Corrente",
            AccountType::Savings => "Poupança",
        }
    }

    /// Inverse of [`AccountType::label`], used for `<select>` values.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A beneficiary already added to a diary request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    /// Only used to remove the entry from the list.
    pub id: Uuid,
    pub name: String,
    pub days: Counter,
    pub bank: String,
    pub agency: String,
    pub account: String,
    pub account_type: AccountType,
    /// CPF, not format checked.
    pub tax_id: String,
}

impl Beneficiary {
    /// Amount owed: days × per-diem rate.
    pub fn total(&self) -> u64 {
        u64::from(self.days.get()) * PER_DIEM_RATE
    }
}

/// The "current beneficiary" form on the diary screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryDraft {
    pub name: String,
    pub days: Counter,
    pub bank: String,
    pub agency: String,
    pub account: String,
    pub account_type: AccountType,
    pub tax_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BeneficiaryEdit {
    Name(String),
    IncrementDays,
    DecrementDays,
    Bank(String),
    Agency(String),
    Account(String),
    AccountType(AccountType),
    TaxId(String),
}

impl BeneficiaryDraft {
    pub fn apply(&mut self, edit: BeneficiaryEdit) {
        match edit {
            BeneficiaryEdit::Name(value) => self.name = value,
            BeneficiaryEdit::IncrementDays => self.days.increment(),
            BeneficiaryEdit::DecrementDays => self.days.decrement(),
            BeneficiaryEdit::Bank(value) => self.bank = value,
            BeneficiaryEdit::Agency(value) => self.agency = value,
            BeneficiaryEdit::Account(value) => self.account = value,
            BeneficiaryEdit::AccountType(kind) => self.account_type = kind,
            BeneficiaryEdit::TaxId(value) => self.tax_id = value,
        }
    }

    /// True when every field required to pay the beneficiary is filled in.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.bank.is_empty()
            && !self.agency.is_empty()
            && !self.account.is_empty()
            && !self.tax_id.is_empty()
    }

    /// Live total shown next to the day counter.
    pub fn total(&self) -> u64 {
        u64::from(self.days.get()) * PER_DIEM_RATE
    }

    /// Consumes the draft, leaving a fresh one behind, and returns the
    /// beneficiary with a new identifier.
    pub fn take(&mut self) -> Beneficiary {
        let draft = std::mem::take(self);
        Beneficiary {
            id: Uuid::new_v4(),
            name: draft.name,
            days: draft.days,
            bank: draft.bank,
            agency: draft.agency,
            account: draft.account,
            account_type: draft.account_type,
            tax_id: draft.tax_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> BeneficiaryDraft {
        BeneficiaryDraft {
            name: "Bruno".into(),
            days: Counter::new(3).unwrap(),
            bank: "BB".into(),
            agency: "0001-2".into(),
            account: "12345-6".into(),
            account_type: AccountType::Savings,
            tax_id: "000.000.000-00".into(),
        }
    }

    #[test]
    fn complete_iff_required_fields_filled() {
        assert!(complete_draft().is_complete());
        assert!(!BeneficiaryDraft::default().is_complete());

        let blank: [fn(&mut BeneficiaryDraft); 5] = [
            |d| d.name.clear(),
            |d| d.bank.clear(),
            |d| d.agency.clear(),
            |d| d.account.clear(),
            |d| d.tax_id.clear(),
        ];
        for clear in blank {
            let mut draft = complete_draft();
            clear(&mut draft);
            assert!(!draft.is_complete(), "{draft:?}");
        }
    }

    #[test]
    fn account_type_and_days_do_not_gate() {
        let mut draft = complete_draft();
        draft.apply(BeneficiaryEdit::AccountType(AccountType::Checking));
        draft.apply(BeneficiaryEdit::DecrementDays);
        draft.apply(BeneficiaryEdit::DecrementDays);
        draft.apply(BeneficiaryEdit::DecrementDays);
        assert_eq!(draft.days, Counter::ONE);
        assert!(draft.is_complete());
    }

    #[test]
    fn take_resets_draft_and_keeps_values() {
        let mut draft = complete_draft();
        let beneficiary = draft.take();

        assert_eq!(draft, BeneficiaryDraft::default());
        assert_eq!(beneficiary.name, "Bruno");
        assert_eq!(beneficiary.account_type, AccountType::Savings);
        assert_eq!(beneficiary.total(), 3 * PER_DIEM_RATE);
    }

    #[test]
    fn identifiers_are_unique_per_addition() {
        let mut draft = complete_draft();
        let first = draft.take();
        let mut draft = complete_draft();
        let second = draft.take();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn account_type_labels_round_trip() {
        for kind in AccountType::ALL {
            assert_eq!(AccountType::from_label(kind.label()), Some(kind));
        }
        assert_eq!(AccountType::from_label("Investimento"), None);
    }
}
