//! Update function for the request wizard, Elm-style: apply the `Msg` to the
//! session and return whether the view must re-render.
//!
//! Rejected actions (which the disabled buttons normally prevent) are logged
//! and do not re-render. Finalizing triggers the CSV download; failures are
//! reported with a toast (in Portuguese).

use common::{ExportError, Result, Session, WizardError};
use log::{error, warn};
use yew::prelude::*;

use super::helpers::{show_toast, today, trigger_download};
use super::messages::Msg;
use super::state::RequestWizard;

pub fn update(component: &mut RequestWizard, _ctx: &Context<RequestWizard>, msg: Msg) -> bool {
    let session = &mut component.session;
    match msg {
        Msg::Start(kind) => report(session.start(kind)),
        Msg::Purchase(edit) => {
            session.edit_purchase(edit);
            true
        }
        Msg::Diary(edit) => {
            session.edit_diary(edit);
            true
        }
        Msg::Beneficiary(edit) => {
            session.edit_beneficiary(edit);
            true
        }
        Msg::AddBeneficiary => report(session.add_beneficiary().map(|_| ())),
        Msg::RemoveBeneficiary(id) => session.remove_beneficiary(id),
        Msg::Next => report(session.advance().map(|_| ())),
        Msg::Back => {
            session.back();
            true
        }
        Msg::EditFromStart => report(session.edit_from_start()),
        Msg::Finalize => finalize(session),
        Msg::Restart => {
            session.reset();
            true
        }
    }
}

fn report(result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("{e}");
            false
        }
    }
}

fn finalize(session: &mut Session) -> bool {
    match session.finalize(today()) {
        Ok(file) => {
            if let Err(e) = trigger_download(&file) {
                error!("download of {} failed: {e:?}", file.filename);
                show_toast("Não foi possível baixar o arquivo da solicitação.");
            }
            true
        }
        Err(WizardError::Export(ExportError::NothingToExport)) => {
            show_toast("Nada para exportar.");
            false
        }
        Err(e) => {
            error!("{e}");
            show_toast("Erro ao gerar o arquivo da solicitação.");
            false
        }
    }
}
