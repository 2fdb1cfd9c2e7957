//! The single in-memory session behind the portal.
//!
//! A `Session` holds the purchase draft, the diary draft, the beneficiary
//! being staged and the active [`Flow`]. The frontend owns exactly one and
//! forwards every user action to it.

use chrono::NaiveDate;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::error::{Result, WizardError};
use crate::export::{self, ExportFile};
use crate::model::{
    BeneficiaryDraft, BeneficiaryEdit, DiaryEdit, DiaryRequest, PurchaseEdit, PurchaseRequest,
};
use crate::wizard::{Flow, PurchaseStep, RequestKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    flow: Flow,
    purchase: PurchaseRequest,
    diary: DiaryRequest,
    beneficiary: BeneficiaryDraft,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn purchase(&self) -> &PurchaseRequest {
        &self.purchase
    }

    pub fn diary(&self) -> &DiaryRequest {
        &self.diary
    }

    pub fn beneficiary_draft(&self) -> &BeneficiaryDraft {
        &self.beneficiary
    }

    /// Leaves the home screen for the first screen of `kind`.
    pub fn start(&mut self, kind: RequestKind) -> Result<()> {
        if self.flow != Flow::Home {
            return Err(self.rejected("start a request"));
        }
        self.flow = Flow::start(kind);
        info!("started {kind:?} request");
        Ok(())
    }

    /// Whether the current screen's required fields are filled in and there
    /// is a next screen to go to.
    pub fn can_advance(&self) -> bool {
        match self.flow {
            Flow::Purchase(step) => step.next().is_some() && step.is_complete(&self.purchase),
            Flow::Diary(step) => step.next().is_some() && step.is_complete(&self.diary),
            Flow::Home | Flow::Success(_) => false,
        }
    }

    /// Moves to the next screen of the active wizard.
    pub fn advance(&mut self) -> Result<Flow> {
        let next = match self.flow {
            Flow::Purchase(step) => step.next().map(|next| {
                (step.is_complete(&self.purchase), Flow::Purchase(next))
            }),
            Flow::Diary(step) => step
                .next()
                .map(|next| (step.is_complete(&self.diary), Flow::Diary(next))),
            Flow::Home | Flow::Success(_) => None,
        };

        match next {
            Some((true, next)) => {
                debug!("{:?} -> {next:?}", self.flow);
                self.flow = next;
                Ok(next)
            }
            Some((false, _)) => {
                warn!("cannot leave {:?}: required fields missing", self.flow);
                Err(WizardError::StepIncomplete(self.flow))
            }
            None => Err(self.rejected("advance")),
        }
    }

    /// Goes one screen back. Going back from the first screen of a wizard
    /// abandons the request and resets the whole session.
    pub fn back(&mut self) -> Flow {
        let previous = match self.flow {
            Flow::Purchase(step) => step.previous().map(Flow::Purchase),
            Flow::Diary(step) => step.previous().map(Flow::Diary),
            Flow::Home | Flow::Success(_) => return self.flow,
        };

        match previous {
            Some(previous) => {
                debug!("{:?} -> {previous:?}", self.flow);
                self.flow = previous;
            }
            None => self.reset(),
        }
        self.flow
    }

    /// "Editar" on the purchase review: back to the first screen, keeping
    /// everything typed so far.
    pub fn edit_from_start(&mut self) -> Result<()> {
        if self.flow != Flow::Purchase(PurchaseStep::Review) {
            return Err(self.rejected("edit the request"));
        }
        self.flow = Flow::Purchase(PurchaseStep::Identity);
        debug!("purchase review -> identity");
        Ok(())
    }

    pub fn edit_purchase(&mut self, edit: PurchaseEdit) {
        self.purchase.apply(edit);
    }

    pub fn edit_diary(&mut self, edit: DiaryEdit) {
        self.diary.apply(edit);
    }

    pub fn edit_beneficiary(&mut self, edit: BeneficiaryEdit) {
        self.beneficiary.apply(edit);
    }

    pub fn can_add_beneficiary(&self) -> bool {
        self.beneficiary.is_complete()
    }

    /// Appends the staged beneficiary to the diary request and clears the
    /// draft. Returns the new entry's identifier.
    pub fn add_beneficiary(&mut self) -> Result<Uuid> {
        if !self.beneficiary.is_complete() {
            return Err(WizardError::BeneficiaryIncomplete);
        }
        let beneficiary = self.beneficiary.take();
        let id = beneficiary.id;
        debug!("added beneficiary {id} ({} days)", beneficiary.days);
        self.diary.beneficiaries.push(beneficiary);
        Ok(id)
    }

    pub fn remove_beneficiary(&mut self, id: Uuid) -> bool {
        let removed = self.diary.remove_beneficiary(id);
        if removed {
            debug!("removed beneficiary {id}");
        }
        removed
    }

    /// Sum over beneficiaries of days × per-diem rate.
    pub fn grand_total(&self) -> u64 {
        self.diary.total()
    }

    /// Builds the export of the request under review and moves to the
    /// success screen. On error the session stays on the review screen.
    pub fn finalize(&mut self, today: NaiveDate) -> Result<ExportFile> {
        let kind = match self.flow.kind() {
            Some(kind) if self.flow.is_review() => kind,
            _ => return Err(self.rejected("finalize")),
        };
        let file = match kind {
            RequestKind::Purchase => export::purchase_export(&self.purchase, today)?,
            RequestKind::Diary => export::diary_export(&self.diary)?,
        };

        self.flow = Flow::Success(kind);
        info!(
            "{kind:?} request exported as {} ({} bytes)",
            file.filename,
            file.contents.len()
        );
        Ok(file)
    }

    /// Drops every draft and returns to the home screen.
    pub fn reset(&mut self) {
        *self = Self::default();
        info!("session reset");
    }

    fn rejected(&self, action: &'static str) -> WizardError {
        warn!("rejected: {action} from {:?}", self.flow);
        WizardError::InvalidTransition {
            from: self.flow,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::model::Urgency;
    use crate::wizard::DiaryStep;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn filled_purchase() -> Session {
        let mut session = Session::new();
        session.start(RequestKind::Purchase).unwrap();
        for edit in [
            PurchaseEdit::RequesterName("Ana".into()),
            PurchaseEdit::Contact("ana@x.com".into()),
            PurchaseEdit::Group("Eco".into()),
            PurchaseEdit::Subgroup("Peixes".into()),
            PurchaseEdit::ItemName("Microscope".into()),
            PurchaseEdit::Link(0, "http://a".into()),
            PurchaseEdit::Justification("Needed for study".into()),
            PurchaseEdit::LimitDate("2025-01-01".into()),
        ] {
            session.edit_purchase(edit);
        }
        session
    }

    fn stage_beneficiary(session: &mut Session, name: &str) {
        for edit in [
            BeneficiaryEdit::Name(name.into()),
            BeneficiaryEdit::Bank("BB".into()),
            BeneficiaryEdit::Agency("0001".into()),
            BeneficiaryEdit::Account("123".into()),
            BeneficiaryEdit::TaxId("000.000.000-00".into()),
        ] {
            session.edit_beneficiary(edit);
        }
    }

    #[test]
    fn start_only_from_home() {
        let mut session = Session::new();
        session.start(RequestKind::Diary).unwrap();
        assert_eq!(session.flow(), Flow::Diary(DiaryStep::Identity));

        let err = session.start(RequestKind::Purchase).unwrap_err();
        assert!(matches!(err, WizardError::InvalidTransition { .. }));
        assert_eq!(session.flow(), Flow::Diary(DiaryStep::Identity));
    }

    #[test]
    fn advance_is_gated() {
        let mut session = Session::new();
        session.start(RequestKind::Purchase).unwrap();
        assert!(!session.can_advance());
        assert!(matches!(
            session.advance(),
            Err(WizardError::StepIncomplete(Flow::Purchase(PurchaseStep::Identity)))
        ));

        let mut session = filled_purchase();
        for _ in 0..5 {
            assert!(session.can_advance());
            session.advance().unwrap();
        }
        assert_eq!(session.flow(), Flow::Purchase(PurchaseStep::Review));
        assert!(!session.can_advance());
        assert!(session.advance().is_err());
    }

    #[test]
    fn back_walks_screens_then_resets() {
        let mut session = filled_purchase();
        session.advance().unwrap();
        session.edit_purchase(PurchaseEdit::IncrementQuantity);

        assert_eq!(session.back(), Flow::Purchase(PurchaseStep::Identity));
        assert_eq!(session.purchase().quantity.get(), 2);

        assert_eq!(session.back(), Flow::Home);
        assert_eq!(session, Session::new());
    }

    #[test]
    fn edit_returns_to_identity_with_data() {
        let mut session = filled_purchase();
        assert!(session.edit_from_start().is_err());
        while session.can_advance() {
            session.advance().unwrap();
        }
        session.edit_from_start().unwrap();
        assert_eq!(session.flow(), Flow::Purchase(PurchaseStep::Identity));
        assert_eq!(session.purchase().item_name, "Microscope");
    }

    #[test]
    fn add_requires_complete_draft() {
        let mut session = Session::new();
        session.start(RequestKind::Diary).unwrap();
        assert!(!session.can_add_beneficiary());
        assert!(matches!(
            session.add_beneficiary(),
            Err(WizardError::BeneficiaryIncomplete)
        ));

        stage_beneficiary(&mut session, "Bruno");
        session.edit_beneficiary(BeneficiaryEdit::IncrementDays);
        assert!(session.can_add_beneficiary());
        let id = session.add_beneficiary().unwrap();

        assert_eq!(session.beneficiary_draft(), &BeneficiaryDraft::default());
        assert_eq!(session.diary().beneficiaries[0].id, id);
        assert_eq!(session.grand_total(), 2 * 380);

        assert!(session.remove_beneficiary(id));
        assert!(!session.remove_beneficiary(id));
        assert_eq!(session.grand_total(), 0);
    }

    #[test]
    fn finalize_only_from_review() {
        let mut session = filled_purchase();
        assert!(matches!(
            session.finalize(today()),
            Err(WizardError::InvalidTransition { action: "finalize", .. })
        ));

        while session.can_advance() {
            session.advance().unwrap();
        }
        session.edit_purchase(PurchaseEdit::Urgency(Urgency::High));
        let file = session.finalize(today()).unwrap();
        assert_eq!(file.filename, "solicitacao_compra.csv");
        assert_eq!(session.flow(), Flow::Success(RequestKind::Purchase));
        assert_eq!(session.back(), Flow::Success(RequestKind::Purchase));
    }

    #[test]
    fn empty_diary_export_keeps_review_open() {
        let mut session = Session::new();
        session.start(RequestKind::Diary).unwrap();
        session.flow = Flow::Diary(DiaryStep::Review);

        let err = session.finalize(today()).unwrap_err();
        assert!(matches!(err, WizardError::Export(ExportError::NothingToExport)));
        assert_eq!(session.flow(), Flow::Diary(DiaryStep::Review));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = filled_purchase();
        session.edit_diary(DiaryEdit::Group("Zoologia".into()));
        stage_beneficiary(&mut session, "Bruno");
        session.reset();
        assert_eq!(session, Session::default());
        assert_eq!(session.flow(), Flow::Home);
    }
}
