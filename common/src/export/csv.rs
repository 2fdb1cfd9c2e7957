//! Semicolon-delimited writer.
//!
//! Layout: BOM, one header row with the column titles, then one row per
//! record with every value double quoted. Quotes inside values are doubled,
//! so free text with `;`, `"` or line breaks keeps the row structure.

use csv::{QuoteStyle, WriterBuilder};

use crate::config::{BOM, CSV_DELIMITER};
use crate::error::ExportError;

/// A flat row with a fixed set of columns.
pub trait Record {
    /// Column titles, in output order.
    const HEADERS: &'static [&'static str];

    /// One value per header, same order.
    fn values(&self) -> Vec<String>;
}

/// Serializes `records` into the export document.
///
/// An empty slice yields [`ExportError::NothingToExport`].
pub fn to_delimited<R: Record>(records: &[R]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let delimiter = char::from(CSV_DELIMITER).to_string();
    let mut out = String::from(BOM);
    out.push_str(&R::HEADERS.join(delimiter.as_str()));
    out.push('\n');

    let mut writer = WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .quote_style(QuoteStyle::Always)
        .from_writer(out.into_bytes());
    for record in records {
        writer.write_record(record.values())?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;

    Ok(String::from_utf8(bytes)?)
}
