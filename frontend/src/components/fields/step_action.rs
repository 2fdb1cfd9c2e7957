use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StepActionProps {
    pub on_next: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("Continuar"))]
    pub label: AttrValue,
}

/// The full-width "continue" button at the bottom of each screen.
pub struct StepAction;

impl Component for StepAction {
    type Message = ();
    type Properties = StepActionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StepAction
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <button
                class="step-action"
                disabled={props.disabled}
                onclick={props.on_next.reform(|_: MouseEvent| ())}
            >
                { props.label.clone() }{ " ›" }
            </button>
        }
    }
}
