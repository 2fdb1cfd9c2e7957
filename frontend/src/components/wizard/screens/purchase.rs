//! The six purchase screens.

use common::model::{PurchaseEdit, Urgency};
use common::wizard::PurchaseStep;
use common::Session;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::fields::{CounterField, InputField, StepAction, TextAreaField};
use crate::components::wizard::{Msg, RequestWizard};

pub fn title(step: PurchaseStep) -> &'static str {
    match step {
        PurchaseStep::Review => "Confirmar Dados",
        _ => "Solicitação de Compra",
    }
}

pub fn view(session: &Session, step: PurchaseStep, link: &Scope<RequestWizard>) -> Html {
    let next = html! {
        <StepAction disabled={!session.can_advance()} on_next={link.callback(|()| Msg::Next)} />
    };

    match step {
        PurchaseStep::Identity => identity(session, link, next),
        PurchaseStep::Item => item(session, link, next),
        PurchaseStep::Links => links(session, link, next),
        PurchaseStep::Justification => justification(session, link, next),
        PurchaseStep::Deadline => deadline(session, link, next),
        PurchaseStep::Review => review(session, link),
    }
}

fn edit(link: &Scope<RequestWizard>, make: fn(String) -> PurchaseEdit) -> Callback<String> {
    link.callback(move |value: String| Msg::Purchase(make(value)))
}

fn identity(session: &Session, link: &Scope<RequestWizard>, next: Html) -> Html {
    let purchase = session.purchase();
    html! {
        <>
            <InputField
                label="Nome do Pesquisador"
                value={purchase.requester_name.clone()}
                placeholder="Seu nome completo"
                required={true}
                on_change={edit(link, PurchaseEdit::RequesterName)}
            />
            <InputField
                label="Contato (WhatsApp ou E-mail)"
                value={purchase.contact.clone()}
                placeholder="Como podemos falar com você?"
                required={true}
                on_change={edit(link, PurchaseEdit::Contact)}
            />
            <InputField
                label="Grupo de Pesquisa"
                value={purchase.group.clone()}
                placeholder="Ex: Ecologia Aquática"
                required={true}
                on_change={edit(link, PurchaseEdit::Group)}
            />
            <InputField
                label="Subgrupo"
                value={purchase.subgroup.clone()}
                placeholder="Ex: Ictiologia"
                required={true}
                on_change={edit(link, PurchaseEdit::Subgroup)}
            />
            { next }
        </>
    }
}

fn item(session: &Session, link: &Scope<RequestWizard>, next: Html) -> Html {
    let purchase = session.purchase();
    html! {
        <>
            <InputField
                label="Nome do Item"
                value={purchase.item_name.clone()}
                placeholder="Ex: Microscópio Binocular"
                required={true}
                on_change={edit(link, PurchaseEdit::ItemName)}
            />
            <TextAreaField
                label="Descrição Técnica"
                value={purchase.technical_description.clone()}
                placeholder="Marca, modelo, especificações, voltagem..."
                on_change={edit(link, PurchaseEdit::TechnicalDescription)}
            />
            <CounterField
                label="Quantidade"
                value={purchase.quantity.get()}
                on_increment={link.callback(|()| Msg::Purchase(PurchaseEdit::IncrementQuantity))}
                on_decrement={link.callback(|()| Msg::Purchase(PurchaseEdit::DecrementQuantity))}
            />
            { next }
        </>
    }
}

// The third link slot is reserved and has no input.
fn links(session: &Session, link: &Scope<RequestWizard>, next: Html) -> Html {
    let purchase = session.purchase();
    html! {
        <>
            <InputField
                label="Link 1 (Obrigatório)"
                value={purchase.links[0].clone()}
                placeholder="http://..."
                required={true}
                on_change={link.callback(|value: String| Msg::Purchase(PurchaseEdit::Link(0, value)))}
            />
            <InputField
                label="Link 2 (Opcional)"
                value={purchase.links[1].clone()}
                placeholder="http://..."
                on_change={link.callback(|value: String| Msg::Purchase(PurchaseEdit::Link(1, value)))}
            />
            { next }
        </>
    }
}

fn justification(session: &Session, link: &Scope<RequestWizard>, next: Html) -> Html {
    let purchase = session.purchase();
    html! {
        <>
            <TextAreaField
                label="Justificativa de Uso"
                value={purchase.justification.clone()}
                placeholder="Como este item contribuirá para a pesquisa?"
                required={true}
                on_change={edit(link, PurchaseEdit::Justification)}
            />
            <div class="field">
                <label style="text-align:center;">{ "Grau de Urgência" }</label>
                <div class="choice-row">
                    { for Urgency::ALL.into_iter().map(|urgency| html! {
                        <button
                            class={classes!("choice", (purchase.urgency == urgency).then_some("active"))}
                            onclick={link.callback(move |_: MouseEvent| Msg::Purchase(PurchaseEdit::Urgency(urgency)))}
                        >
                            { urgency.label() }
                        </button>
                    }) }
                </div>
            </div>
            { next }
        </>
    }
}

fn deadline(session: &Session, link: &Scope<RequestWizard>, next: Html) -> Html {
    let purchase = session.purchase();
    html! {
        <>
            <InputField
                label="Data Limite de Entrega"
                input_type="date"
                value={purchase.limit_date.clone()}
                required={true}
                on_change={edit(link, PurchaseEdit::LimitDate)}
            />
            <div class="note">
                { "Esta data será usada para priorização do fluxo logístico e cotações." }
            </div>
            { next }
        </>
    }
}

fn review(session: &Session, link: &Scope<RequestWizard>) -> Html {
    let purchase = session.purchase();
    let urgent = purchase.urgency == Urgency::High;
    html! {
        <>
            <div class="summary">
                { summary_row("Requerente", html! { <>{ purchase.requester_name.clone() }</> }) }
                { summary_row("Item", html! { <>{ purchase.item_name.clone() }</> }) }
                { summary_row("Qtd", html! { <>{ purchase.quantity.get() }</> }) }
                { summary_row("Prioridade", html! {
                    <span class={classes!("badge", urgent.then_some("alert"))}>{ purchase.urgency.label() }</span>
                }) }
            </div>
            <div class="actions">
                <button class="secondary" onclick={link.callback(|_: MouseEvent| Msg::EditFromStart)}>
                    { "Editar" }
                </button>
                <button class="primary" onclick={link.callback(|_: MouseEvent| Msg::Finalize)}>
                    { "Finalizar Envio" }
                </button>
            </div>
        </>
    }
}

fn summary_row(label: &'static str, value: Html) -> Html {
    html! {
        <div class="summary-row">
            <span style="color:#64748b;font-weight:700;text-transform:uppercase;font-size:0.75rem;">{ label }</span>
            <strong>{ value }</strong>
        </div>
    }
}
