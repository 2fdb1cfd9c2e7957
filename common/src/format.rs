//! pt-BR presentation of money and dates.

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

use crate::config::{CURRENCY_SYMBOL, DATE_FORMAT};

/// `3040` → `"R$ 3.040"`. Amounts are whole reais.
pub fn format_currency(amount: u64) -> String {
    format!("{CURRENCY_SYMBOL} {}", amount.to_formatted_string(&Locale::pt))
}

/// `2025-03-07` → `"07/03/2025"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
