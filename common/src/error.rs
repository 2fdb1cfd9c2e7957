//! Error types of the public API.

use thiserror::Error;

use crate::wizard::Flow;

/// Failures while turning a request into a downloadable CSV document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The record list was empty, so there is no file to hand out.
    #[error("nothing to export")]
    NothingToExport,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Rejected wizard actions. The screens disable the matching buttons, so in
/// practice these only show up when the session is driven directly.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("cannot {action} while on {from:?}")]
    InvalidTransition { from: Flow, action: &'static str },

    #[error("required fields missing on {0:?}")]
    StepIncomplete(Flow),

    #[error("beneficiary draft is incomplete")]
    BeneficiaryIncomplete,

    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, WizardError>;
