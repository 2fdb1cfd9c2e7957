//! Purchase request filled in by the six purchase screens.

use serde::{Deserialize, Serialize};

use crate::config::LINK_SLOTS;
use crate::model::{Counter, Urgency};

/// A research material purchase request.
///
/// `links[2]` is a reserved slot: it is part of the record but no screen
/// edits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub requester_name: String,
    /// WhatsApp number or e-mail, free text.
    pub contact: String,
    pub group: String,
    pub subgroup: String,
    pub item_name: String,
    pub technical_description: String,
    pub quantity: Counter,
    pub links: [String; LINK_SLOTS],
    pub justification: String,
    pub urgency: Urgency,
    /// Delivery deadline as produced by a date input (`YYYY-MM-DD`).
    pub limit_date: String,
}

/// A single field change coming from a purchase screen.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseEdit {
    RequesterName(String),
    Contact(String),
    Group(String),
    Subgroup(String),
    ItemName(String),
    TechnicalDescription(String),
    IncrementQuantity,
    DecrementQuantity,
    Link(usize, String),
    Justification(String),
    Urgency(Urgency),
    LimitDate(String),
}

impl PurchaseRequest {
    pub fn apply(&mut self, edit: PurchaseEdit) {
        match edit {
            PurchaseEdit::RequesterName(value) => self.requester_name = value,
            PurchaseEdit::Contact(value) => self.contact = value,
            PurchaseEdit::Group(value) => self.group = value,
            PurchaseEdit::Subgroup(value) => self.subgroup = value,
            PurchaseEdit::ItemName(value) => self.item_name = value,
            PurchaseEdit::TechnicalDescription(value) => self.technical_description = value,
            PurchaseEdit::IncrementQuantity => self.quantity.increment(),
            PurchaseEdit::DecrementQuantity => self.quantity.decrement(),
            PurchaseEdit::Link(index, value) => match self.links.get_mut(index) {
                Some(slot) => *slot = value,
                None => log::warn!("ignoring edit of link slot {index}"),
            },
            PurchaseEdit::Justification(value) => self.justification = value,
            PurchaseEdit::Urgency(urgency) => self.urgency = urgency,
            PurchaseEdit::LimitDate(value) => self.limit_date = value,
        }
    }

    pub fn has_identity(&self) -> bool {
        !self.requester_name.is_empty()
            && !self.contact.is_empty()
            && !self.group.is_empty()
            && !self.subgroup.is_empty()
    }
}
