//! Per-diem ("diárias") request for a field trip.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Beneficiary;

/// A travel allowance request covering one or more beneficiaries.
///
/// `subgroup` is reserved: it is kept for parity with purchase requests but
/// no screen collects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiaryRequest {
    pub requester_name: String,
    pub contact: String,
    pub group: String,
    pub subgroup: String,
    /// Trip start, `YYYY-MM-DD`. Not checked against `end_date`.
    pub start_date: String,
    pub end_date: String,
    /// Insertion order is display and export order.
    pub beneficiaries: Vec<Beneficiary>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiaryEdit {
    RequesterName(String),
    Contact(String),
    Group(String),
    StartDate(String),
    EndDate(String),
}

impl DiaryRequest {
    pub fn apply(&mut self, edit: DiaryEdit) {
        match edit {
            DiaryEdit::RequesterName(value) => self.requester_name = value,
            DiaryEdit::Contact(value) => self.contact = value,
            DiaryEdit::Group(value) => self.group = value,
            DiaryEdit::StartDate(value) => self.start_date = value,
            DiaryEdit::EndDate(value) => self.end_date = value,
        }
    }

    pub fn has_identity(&self) -> bool {
        !self.requester_name.is_empty() && !self.contact.is_empty() && !self.group.is_empty()
    }

    pub fn has_period(&self) -> bool {
        !self.start_date.is_empty() && !self.end_date.is_empty()
    }

    /// Grand total of the request, recomputed from the beneficiaries.
    pub fn total(&self) -> u64 {
        self.beneficiaries.iter().map(Beneficiary::total).sum()
    }

    pub fn total_days(&self) -> u64 {
        self.beneficiaries
            .iter()
            .map(|b| u64::from(b.days.get()))
            .sum()
    }

    /// Removes the beneficiary with `id`, keeping the others in order.
    /// Returns `false` if no entry matched.
    pub fn remove_beneficiary(&mut self, id: Uuid) -> bool {
        let before = self.beneficiaries.len();
        self.beneficiaries.retain(|b| b.id != id);
        before != self.beneficiaries.len()
    }
}
