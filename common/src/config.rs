//! Compile-time settings. The portal has no runtime configuration: rate,
//! filenames and locale are fixed for the PELD administration.

/// Per-diem allowance paid per day, in whole reais.
pub const PER_DIEM_RATE: u64 = 380;

/// Number of reference link slots held by a purchase request.
pub const LINK_SLOTS: usize = 3;

pub const PURCHASE_EXPORT_FILENAME: &str = "solicitacao_compra.csv";
pub const DIARY_EXPORT_FILENAME: &str = "solicitacao_diarias.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// Status written on every exported row; the projects office updates it later.
pub const STATUS_PENDING: &str = "Pendente";

pub const CSV_DELIMITER: u8 = b';';

/// Byte-order mark so spreadsheet tools detect UTF-8.
pub const BOM: &str = "\u{FEFF}";

pub const CURRENCY_SYMBOL: &str = "R$";

/// dd/mm/yyyy, as used in Brazil.
pub const DATE_FORMAT: &str = "%d/%m/%Y";
