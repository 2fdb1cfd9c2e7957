use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CounterFieldProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    pub value: u32,
    pub on_increment: Callback<()>,
    pub on_decrement: Callback<()>,
    /// Rendered to the right of the stepper (e.g. the running total).
    #[prop_or_default]
    pub children: Html,
}

/// `-` / value / `+` stepper. Clamping is the model's job.
pub struct CounterField;

impl Component for CounterField {
    type Message = ();
    type Properties = CounterFieldProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CounterField
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="field">
                {
                    if let Some(label) = &props.label {
                        html! { <label>{ label.clone() }</label> }
                    } else {
                        html! {}
                    }
                }
                <div class="counter">
                    <button onclick={props.on_decrement.reform(|_: MouseEvent| ())}>{ "-" }</button>
                    <span>{ props.value }</span>
                    <button onclick={props.on_increment.reform(|_: MouseEvent| ())}>{ "+" }</button>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
