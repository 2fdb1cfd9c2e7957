use chrono::NaiveDate;
use common::model::{BeneficiaryEdit, DiaryEdit, PurchaseEdit, Urgency};
use common::wizard::{DiaryStep, PurchaseStep};
use common::{ExportError, Flow, RequestKind, Session, WizardError};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
}

fn parse(contents: &str) -> Vec<Vec<String>> {
    let body = contents.strip_prefix('\u{FEFF}').expect("BOM");
    let mut lines = body.lines();
    let header: Vec<String> = lines
        .next()
        .expect("header")
        .split(';')
        .map(str::to_string)
        .collect();
    let mut rows = vec![header];
    for line in lines {
        rows.push(
            line.split(';')
                .map(|cell| cell.trim_matches('"').to_string())
                .collect(),
        );
    }
    rows
}

fn column(rows: &[Vec<String>], row: usize, title: &str) -> String {
    let index = rows[0]
        .iter()
        .position(|h| h == title)
        .unwrap_or_else(|| panic!("no column {title}"));
    rows[row][index].clone()
}

#[test]
fn purchase_end_to_end() {
    let mut session = Session::new();
    session.start(RequestKind::Purchase).expect("start");

    for edit in [
        PurchaseEdit::RequesterName("Ana".into()),
        PurchaseEdit::Contact("ana@x.com".into()),
        PurchaseEdit::Group("Eco".into()),
        PurchaseEdit::Subgroup("Peixes".into()),
    ] {
        session.edit_purchase(edit);
    }
    session.advance().expect("identity");

    session.edit_purchase(PurchaseEdit::ItemName("Microscope".into()));
    session.edit_purchase(PurchaseEdit::IncrementQuantity);
    session.advance().expect("item");

    session.edit_purchase(PurchaseEdit::Link(0, "http://a".into()));
    session.edit_purchase(PurchaseEdit::Link(1, String::new()));
    session.advance().expect("links");

    session.edit_purchase(PurchaseEdit::Justification("Needed for study".into()));
    session.edit_purchase(PurchaseEdit::Urgency(Urgency::Low));
    session.advance().expect("justification");

    session.edit_purchase(PurchaseEdit::LimitDate("2025-01-01".into()));
    assert_eq!(session.advance().expect("deadline"), Flow::Purchase(PurchaseStep::Review));

    let file = session.finalize(today()).expect("export");
    assert_eq!(file.filename, "solicitacao_compra.csv");
    assert_eq!(session.flow(), Flow::Success(RequestKind::Purchase));

    let rows = parse(&file.contents);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 11);
    assert_eq!(column(&rows, 1, "Data da Solicitação"), "15/01/2025");
    assert_eq!(column(&rows, 1, "Pesquisador"), "Ana");
    assert_eq!(column(&rows, 1, "Quantidade"), "2");
    assert_eq!(column(&rows, 1, "Urgência"), "Baixa");
    assert_eq!(column(&rows, 1, "Status"), "Pendente");

    session.reset();
    assert_eq!(session, Session::new());
}

#[test]
fn diary_end_to_end() {
    let mut session = Session::new();
    session.start(RequestKind::Diary).expect("start");
    session.edit_diary(DiaryEdit::RequesterName("Carla".into()));
    session.edit_diary(DiaryEdit::Contact("carla@x.com".into()));
    session.edit_diary(DiaryEdit::Group("Zoologia".into()));
    session.advance().expect("identity");

    session.edit_diary(DiaryEdit::StartDate("2025-02-10".into()));
    session.edit_diary(DiaryEdit::EndDate("2025-02-14".into()));
    session.advance().expect("period");

    for (name, days) in [("Bruno", 3), ("Dora", 5)] {
        session.edit_beneficiary(BeneficiaryEdit::Name(name.into()));
        for _ in 1..days {
            session.edit_beneficiary(BeneficiaryEdit::IncrementDays);
        }
        session.edit_beneficiary(BeneficiaryEdit::Bank("BB".into()));
        session.edit_beneficiary(BeneficiaryEdit::Agency("0001-2".into()));
        session.edit_beneficiary(BeneficiaryEdit::Account("12345-6".into()));
        session.edit_beneficiary(BeneficiaryEdit::TaxId("000.000.000-00".into()));
        session.add_beneficiary().expect("complete draft");
    }
    assert_eq!(session.grand_total(), 3040);
    assert_eq!(session.diary().total_days(), 8);

    session.advance().expect("beneficiaries");
    assert_eq!(session.flow(), Flow::Diary(DiaryStep::Review));

    let file = session.finalize(today()).expect("export");
    assert_eq!(file.filename, "solicitacao_diarias.csv");

    let rows = parse(&file.contents);
    assert_eq!(rows.len(), 3);
    assert_eq!(column(&rows, 1, "Beneficiário"), "Bruno");
    assert_eq!(column(&rows, 1, "Valor Total"), "1140");
    assert_eq!(column(&rows, 2, "Beneficiário"), "Dora");
    assert_eq!(column(&rows, 2, "Valor Total"), "1900");
    assert_eq!(column(&rows, 2, "Responsável"), "Carla");
}

#[test]
fn diary_export_unreachable_without_beneficiaries() {
    let mut session = Session::new();
    session.start(RequestKind::Diary).expect("start");
    session.edit_diary(DiaryEdit::RequesterName("Carla".into()));
    session.edit_diary(DiaryEdit::Contact("carla@x.com".into()));
    session.edit_diary(DiaryEdit::Group("Zoologia".into()));
    session.advance().expect("identity");
    session.edit_diary(DiaryEdit::StartDate("2025-02-10".into()));
    session.edit_diary(DiaryEdit::EndDate("2025-02-14".into()));
    session.advance().expect("period");

    assert!(!session.can_advance());
    assert!(matches!(
        session.advance(),
        Err(WizardError::StepIncomplete(Flow::Diary(DiaryStep::Beneficiaries)))
    ));
    assert!(matches!(
        session.finalize(today()),
        Err(WizardError::InvalidTransition { .. })
    ));
}

#[test]
fn removing_last_beneficiary_closes_the_gate() {
    let mut session = Session::new();
    session.start(RequestKind::Diary).expect("start");
    session.edit_diary(DiaryEdit::RequesterName("Carla".into()));
    session.edit_diary(DiaryEdit::Contact("carla@x.com".into()));
    session.edit_diary(DiaryEdit::Group("Zoologia".into()));
    session.advance().expect("identity");
    session.edit_diary(DiaryEdit::StartDate("2025-02-10".into()));
    session.edit_diary(DiaryEdit::EndDate("2025-02-10".into()));
    session.advance().expect("period");

    session.edit_beneficiary(BeneficiaryEdit::Name("Bruno".into()));
    session.edit_beneficiary(BeneficiaryEdit::Bank("Caixa".into()));
    session.edit_beneficiary(BeneficiaryEdit::Agency("12".into()));
    session.edit_beneficiary(BeneficiaryEdit::Account("34".into()));
    session.edit_beneficiary(BeneficiaryEdit::TaxId("111".into()));
    let id = session.add_beneficiary().expect("add");
    assert!(session.can_advance());

    assert!(session.remove_beneficiary(id));
    assert!(!session.can_advance());
    assert!(matches!(
        session.advance(),
        Err(WizardError::StepIncomplete(_))
    ));

    session.edit_beneficiary(BeneficiaryEdit::Name("Bruno".into()));
    assert!(!session.can_add_beneficiary());
    assert!(matches!(
        common::export::diary_export(session.diary()),
        Err(ExportError::NothingToExport)
    ));
}

#[test]
fn back_from_first_screen_discards_everything() {
    let mut session = Session::new();
    session.start(RequestKind::Diary).expect("start");
    session.edit_diary(DiaryEdit::RequesterName("Carla".into()));
    session.edit_beneficiary(BeneficiaryEdit::Name("Bruno".into()));

    assert_eq!(session.back(), Flow::Home);
    assert_eq!(session, Session::default());
    assert!(session.start(RequestKind::Purchase).is_ok());
}
