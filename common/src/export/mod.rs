//! CSV export of finished requests.
//!
//! [`csv`] turns records into the delimited document; [`records`] maps each
//! request kind onto its columns.

pub mod csv;
pub mod records;

pub use self::csv::{Record, to_delimited};
pub use records::{DiaryRecord, PurchaseRecord, diary_export, purchase_export};

use crate::config::EXPORT_MIME_TYPE;

/// A document ready to be handed to the browser download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: &'static str,
    pub contents: String,
}

impl ExportFile {
    pub fn mime_type(&self) -> &'static str {
        EXPORT_MIME_TYPE
    }
}
