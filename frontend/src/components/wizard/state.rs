//! Component state for the request wizard.

use common::Session;

/// Holds the one `Session` of the running app. Fields are `pub` because the
/// `update`, `view` and screen modules read them directly.
pub struct RequestWizard {
    pub session: Session,
}

impl RequestWizard {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }
}
