//! View rendering for the request wizard: picks the screen for the active
//! `Flow` and wraps it in the shared `Layout` card.

use common::Flow;
use yew::prelude::*;

use super::messages::Msg;
use super::screens::{diary, home, purchase, success};
use super::state::RequestWizard;
use crate::layout::Layout;

pub fn view(component: &RequestWizard, ctx: &Context<RequestWizard>) -> Html {
    let link = ctx.link();
    let session = &component.session;
    let flow = session.flow();

    match flow {
        Flow::Home => html! {
            <Layout>{ home::view(link) }</Layout>
        },
        Flow::Purchase(step) => html! {
            <Layout
                title={purchase::title(step)}
                on_back={link.callback(|_: MouseEvent| Msg::Back)}
                progress={flow.progress()}
            >
                { purchase::view(session, step, link) }
            </Layout>
        },
        Flow::Diary(step) => html! {
            <Layout
                title={diary::TITLE}
                on_back={link.callback(|_: MouseEvent| Msg::Back)}
                progress={flow.progress()}
            >
                { diary::view(session, step, link) }
            </Layout>
        },
        Flow::Success(_) => html! {
            <Layout>{ success::view(link) }</Layout>
        },
    }
}
