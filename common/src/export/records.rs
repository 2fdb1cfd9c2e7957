//! Column mapping of each request kind.

use chrono::NaiveDate;

use crate::config::{DIARY_EXPORT_FILENAME, PURCHASE_EXPORT_FILENAME, STATUS_PENDING};
use crate::error::ExportError;
use crate::export::{ExportFile, Record, to_delimited};
use crate::format::format_date;
use crate::model::{Beneficiary, DiaryRequest, PurchaseRequest};

/// The single row of a purchase export.
pub struct PurchaseRecord<'a> {
    pub submitted_on: NaiveDate,
    pub request: &'a PurchaseRequest,
}

impl Record for PurchaseRecord<'_> {
    const HEADERS: &'static [&'static str] = &[
        "Data da Solicitação",
        "Pesquisador",
        "Contato",
        "Grupo",
        "Subgrupo",
        "Item",
        "Descrição Técnica",
        "Quantidade",
        "Justificativa",
        "Urgência",
        "Status",
    ];

    fn values(&self) -> Vec<String> {
        let r = self.request;
        vec![
            format_date(self.submitted_on),
            r.requester_name.clone(),
            r.contact.clone(),
            r.group.clone(),
            r.subgroup.clone(),
            r.item_name.clone(),
            r.technical_description.clone(),
            r.quantity.to_string(),
            r.justification.clone(),
            r.urgency.label().to_string(),
            STATUS_PENDING.to_string(),
        ]
    }
}

/// One row per beneficiary of a diary request.
pub struct DiaryRecord<'a> {
    pub request: &'a DiaryRequest,
    pub beneficiary: &'a Beneficiary,
}

impl Record for DiaryRecord<'_> {
    const HEADERS: &'static [&'static str] = &[
        "Responsável",
        "Contato",
        "Beneficiário",
        "Qtd Diárias",
        "Valor Total",
        "Banco",
        "Agência",
        "Conta",
        "Tipo",
        "CPF",
        "Status",
    ];

    fn values(&self) -> Vec<String> {
        let b = self.beneficiary;
        vec![
            self.request.requester_name.clone(),
            self.request.contact.clone(),
            b.name.clone(),
            b.days.to_string(),
            b.total().to_string(),
            b.bank.clone(),
            b.agency.clone(),
            b.account.clone(),
            b.account_type.label().to_string(),
            b.tax_id.clone(),
            STATUS_PENDING.to_string(),
        ]
    }
}

pub fn purchase_export(
    request: &PurchaseRequest,
    submitted_on: NaiveDate,
) -> Result<ExportFile, ExportError> {
    let record = PurchaseRecord {
        submitted_on,
        request,
    };
    Ok(ExportFile {
        filename: PURCHASE_EXPORT_FILENAME,
        contents: to_delimited(&[record])?,
    })
}

pub fn diary_export(request: &DiaryRequest) -> Result<ExportFile, ExportError> {
    let records: Vec<_> = request
        .beneficiaries
        .iter()
        .map(|beneficiary| DiaryRecord {
            request,
            beneficiary,
        })
        .collect();
    Ok(ExportFile {
        filename: DIARY_EXPORT_FILENAME,
        contents: to_delimited(&records)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BeneficiaryDraft, BeneficiaryEdit, PurchaseEdit};

    #[test]
    fn purchase_row_has_eleven_columns() {
        let mut request = PurchaseRequest::default();
        request.apply(PurchaseEdit::TechnicalDescription("Lente 100x; \"óleo\"".into()));
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();

        let file = purchase_export(&request, date).unwrap();
        let row = file.contents.lines().nth(1).unwrap();
        assert!(row.starts_with("\"07/03/2025\";"));
        assert!(row.contains("\"Lente 100x; \"\"óleo\"\"\""));
        assert!(row.ends_with(";\"1\";\"\";\"Baixa\";\"Pendente\""));
        assert_eq!(PurchaseRecord::HEADERS.len(), 11);
    }

    #[test]
    fn reserved_subgroup_is_not_exported_for_diaries() {
        assert!(!DiaryRecord::HEADERS.contains(&"Subgrupo"));
        assert_eq!(DiaryRecord::HEADERS.len(), 11);
    }

    #[test]
    fn diary_without_beneficiaries_exports_nothing() {
        let request = DiaryRequest::default();
        assert!(matches!(
            diary_export(&request),
            Err(ExportError::NothingToExport)
        ));
    }

    #[test]
    fn diary_rows_follow_insertion_order() {
        let mut request = DiaryRequest::default();
        for name in ["Caio", "Dora"] {
            let mut draft = BeneficiaryDraft::default();
            draft.apply(BeneficiaryEdit::Name(name.into()));
            request.beneficiaries.push(draft.take());
        }
        let file = diary_export(&request).unwrap();
        let rows: Vec<_> = file.contents.lines().skip(1).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("\"Caio\""));
        assert!(rows[1].contains("\"Dora\""));
        assert!(rows[1].contains("\"380\";"));
        assert!(rows[1].contains("\"Corrente\""));
    }
}
