use yew::html::Scope;
use yew::prelude::*;

use crate::components::wizard::{Msg, RequestWizard};

pub fn view(link: &Scope<RequestWizard>) -> Html {
    html! {
        <div style="text-align:center;padding:2.5rem 0;">
            <div style="font-size:5rem;color:#10b981;margin-bottom:2rem;">{ "✓" }</div>
            <h1 style="font-size:2.2rem;font-weight:900;margin-bottom:1.5rem;">{ "Solicitação enviada!" }</h1>
            <p style="color:#64748b;font-size:1.1rem;max-width:24rem;margin:0 auto 3.5rem;line-height:1.6;">
                { "Sua solicitação foi enviada com sucesso, nosso setor de projetos irá iniciar o processo e logo entrará em contato com você." }
            </p>
            <button class="step-action" onclick={link.callback(|_: MouseEvent| Msg::Restart)}>
                { "Nova Solicitação" }
            </button>
        </div>
    }
}
