use common::model::{BeneficiaryEdit, DiaryEdit, PurchaseEdit};
use common::RequestKind;
use uuid::Uuid;

#[derive(Clone)]
pub enum Msg {
    Start(RequestKind),
    Purchase(PurchaseEdit),
    Diary(DiaryEdit),
    Beneficiary(BeneficiaryEdit),
    AddBeneficiary,
    RemoveBeneficiary(Uuid),
    Next,
    Back,
    EditFromStart,
    Finalize,
    Restart,
}
