use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::required_marker;

#[derive(Properties, PartialEq)]
pub struct InputFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    /// `text` or `date`.
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
}

pub struct InputField;

impl Component for InputField {
    type Message = ();
    type Properties = InputFieldProps;

    fn create(_ctx: &Context<Self>) -> Self {
        InputField
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        });

        html! {
            <div class="field">
                <label>{ props.label.clone() }{ required_marker(props.required) }</label>
                <input
                    type={props.input_type.clone()}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    {oninput}
                />
            </div>
        }
    }
}
