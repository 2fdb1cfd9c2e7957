//! The four per-diem screens. The beneficiary screen stages one beneficiary
//! at a time and lists the ones already added.

use common::format::format_currency;
use common::model::{AccountType, Beneficiary, BeneficiaryEdit, DiaryEdit};
use common::wizard::DiaryStep;
use common::Session;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::fields::{CounterField, InputField, SelectField, StepAction};
use crate::components::wizard::{Msg, RequestWizard};

pub const TITLE: &str = "Diárias e Auxílios";

pub fn view(session: &Session, step: DiaryStep, link: &Scope<RequestWizard>) -> Html {
    match step {
        DiaryStep::Identity => identity(session, link),
        DiaryStep::Period => period(session, link),
        DiaryStep::Beneficiaries => beneficiaries(session, link),
        DiaryStep::Review => review(session, link),
    }
}

fn edit(link: &Scope<RequestWizard>, make: fn(String) -> DiaryEdit) -> Callback<String> {
    link.callback(move |value: String| Msg::Diary(make(value)))
}

fn edit_beneficiary(
    link: &Scope<RequestWizard>,
    make: fn(String) -> BeneficiaryEdit,
) -> Callback<String> {
    link.callback(move |value: String| Msg::Beneficiary(make(value)))
}

fn next(session: &Session, link: &Scope<RequestWizard>, label: &'static str) -> Html {
    html! {
        <StepAction
            label={label}
            disabled={!session.can_advance()}
            on_next={link.callback(|()| Msg::Next)}
        />
    }
}

// Subgroup is not collected on this flow.
fn identity(session: &Session, link: &Scope<RequestWizard>) -> Html {
    let diary = session.diary();
    html! {
        <>
            <InputField
                label="Nome do Responsável"
                value={diary.requester_name.clone()}
                placeholder="Quem está solicitando?"
                required={true}
                on_change={edit(link, DiaryEdit::RequesterName)}
            />
            <InputField
                label="Contato (WhatsApp ou E-mail)"
                value={diary.contact.clone()}
                placeholder="Como podemos falar com você?"
                required={true}
                on_change={edit(link, DiaryEdit::Contact)}
            />
            <InputField
                label="Grupo de Pesquisa"
                value={diary.group.clone()}
                placeholder="Ex: Zoologia de Invertebrados"
                required={true}
                on_change={edit(link, DiaryEdit::Group)}
            />
            { next(session, link, "Continuar") }
        </>
    }
}

fn period(session: &Session, link: &Scope<RequestWizard>) -> Html {
    let diary = session.diary();
    html! {
        <>
            <div style="display:grid;grid-template-columns:1fr 1fr;gap:1rem;">
                <InputField
                    label="Início"
                    input_type="date"
                    value={diary.start_date.clone()}
                    required={true}
                    on_change={edit(link, DiaryEdit::StartDate)}
                />
                <InputField
                    label="Término"
                    input_type="date"
                    value={diary.end_date.clone()}
                    required={true}
                    on_change={edit(link, DiaryEdit::EndDate)}
                />
            </div>
            { next(session, link, "Continuar") }
        </>
    }
}

fn beneficiaries(session: &Session, link: &Scope<RequestWizard>) -> Html {
    let draft = session.beneficiary_draft();
    let added = &session.diary().beneficiaries;
    let account_types: Vec<AttrValue> = AccountType::ALL
        .into_iter()
        .map(|kind| AttrValue::Static(kind.label()))
        .collect();
    let can_add = session.can_add_beneficiary();

    html! {
        <>
            <div class="summary">
                <InputField
                    label="Beneficiário"
                    value={draft.name.clone()}
                    placeholder="Nome completo"
                    required={true}
                    on_change={edit_beneficiary(link, BeneficiaryEdit::Name)}
                />
                <CounterField
                    value={draft.days.get()}
                    on_increment={link.callback(|()| Msg::Beneficiary(BeneficiaryEdit::IncrementDays))}
                    on_decrement={link.callback(|()| Msg::Beneficiary(BeneficiaryEdit::DecrementDays))}
                >
                    <span style="text-align:right;">
                        <small style="display:block;color:#d97706;font-weight:900;">{ "TOTAL DIÁRIA" }</small>
                        <strong>{ format_currency(draft.total()) }</strong>
                    </span>
                </CounterField>

                <h4 style="color:#94a3b8;font-size:0.7rem;letter-spacing:0.2em;">{ "DADOS PARA PAGAMENTO" }</h4>
                <div style="display:grid;grid-template-columns:1fr 1fr;gap:0.75rem;">
                    <InputField
                        label="Banco"
                        value={draft.bank.clone()}
                        placeholder="Ex: BB, Bradesco..."
                        required={true}
                        on_change={edit_beneficiary(link, BeneficiaryEdit::Bank)}
                    />
                    <InputField
                        label="Agência"
                        value={draft.agency.clone()}
                        placeholder="Ex: 0001-2"
                        required={true}
                        on_change={edit_beneficiary(link, BeneficiaryEdit::Agency)}
                    />
                    <InputField
                        label="Conta"
                        value={draft.account.clone()}
                        placeholder="Ex: 12345-6"
                        required={true}
                        on_change={edit_beneficiary(link, BeneficiaryEdit::Account)}
                    />
                    <SelectField
                        label="Tipo de Conta"
                        value={draft.account_type.label()}
                        options={account_types}
                        required={true}
                        on_change={link.batch_callback(|label: String| {
                            AccountType::from_label(&label)
                                .map(|kind| Msg::Beneficiary(BeneficiaryEdit::AccountType(kind)))
                        })}
                    />
                </div>
                <InputField
                    label="CPF"
                    value={draft.tax_id.clone()}
                    placeholder="000.000.000-00"
                    required={true}
                    on_change={edit_beneficiary(link, BeneficiaryEdit::TaxId)}
                />
                <button
                    class={classes!("choice", can_add.then_some("active"))}
                    style="width:100%;margin-top:1rem;"
                    disabled={!can_add}
                    onclick={link.callback(|_: MouseEvent| Msg::AddBeneficiary)}
                >
                    { "+ Adicionar Beneficiário" }
                </button>
            </div>

            {
                if added.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div style="margin-bottom:2.5rem;">
                            <h4 style="color:#94a3b8;font-size:0.75rem;">{ format!("SOLICITADOS ({})", added.len()) }</h4>
                            { for added.iter().map(|beneficiary| beneficiary_row(beneficiary, link)) }
                        </div>
                    }
                }
            }
            { next(session, link, "Gerar Revisão") }
        </>
    }
}

fn beneficiary_row(beneficiary: &Beneficiary, link: &Scope<RequestWizard>) -> Html {
    let id = beneficiary.id;
    html! {
        <div class="beneficiary-row" key={id.to_string()}>
            <div>
                <strong style="display:block;">{ beneficiary.name.clone() }</strong>
                <small style="color:#64748b;">
                    { format!(
                        "{} diárias • CPF: {} • {} AG: {}",
                        beneficiary.days, beneficiary.tax_id, beneficiary.bank, beneficiary.agency
                    ) }
                </small>
            </div>
            <button
                title="Remover"
                style="border:none;background:none;color:#f87171;cursor:pointer;font-size:1.2rem;"
                onclick={link.callback(move |_: MouseEvent| Msg::RemoveBeneficiary(id))}
            >
                { "✕" }
            </button>
        </div>
    }
}

fn review(session: &Session, link: &Scope<RequestWizard>) -> Html {
    let diary = session.diary();
    html! {
        <>
            <div class="total-card">
                <span style="color:#818cf8;font-size:0.75rem;letter-spacing:0.3em;">{ "TOTAL DA SOLICITAÇÃO" }</span>
                <strong>{ format_currency(session.grand_total()) }</strong>
                <small style="display:block;color:#818cf8;">
                    { format!("{} beneficiários • {} diárias", diary.beneficiaries.len(), diary.total_days()) }
                </small>
            </div>
            <div class="actions">
                <button class="secondary" onclick={link.callback(|_: MouseEvent| Msg::Back)}>
                    { "Voltar" }
                </button>
                <button class="primary" onclick={link.callback(|_: MouseEvent| Msg::Finalize)}>
                    { "Emitir Relatório" }
                </button>
            </div>
        </>
    }
}
