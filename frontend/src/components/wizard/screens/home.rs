use common::RequestKind;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::wizard::{Msg, RequestWizard};

pub fn view(link: &Scope<RequestWizard>) -> Html {
    html! {
        <div style="text-align:center;">
            <h1 style="font-size:2.2rem;font-weight:900;margin-bottom:0.5rem;">{ "Solicitações PELD" }</h1>
            <p style="color:#64748b;font-size:1.1rem;margin-bottom:3rem;">
                { "Portal oficial de solicitações administrativas" }
            </p>
            { menu_entry(link, RequestKind::Diary, "Solicitar Diárias", "Viagens e reembolsos") }
            { menu_entry(link, RequestKind::Purchase, "Solicitar Compra", "Materiais de pesquisa") }
        </div>
    }
}

fn menu_entry(
    link: &Scope<RequestWizard>,
    kind: RequestKind,
    title: &'static str,
    subtitle: &'static str,
) -> Html {
    html! {
        <button class="menu-entry" onclick={link.callback(move |_: MouseEvent| Msg::Start(kind))}>
            <span>
                <span style="display:block;font-size:1.5rem;font-weight:900;">{ title }</span>
                <span style="color:#64748b;">{ subtitle }</span>
            </span>
            <span style="color:#cbd5e1;font-size:1.5rem;">{ "›" }</span>
        </button>
    }
}
