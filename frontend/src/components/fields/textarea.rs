use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::required_marker;

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
}

pub struct TextAreaField;

impl Component for TextAreaField {
    type Message = ();
    type Properties = TextAreaFieldProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TextAreaField
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(textarea.value());
        });

        html! {
            <div class="field">
                <label>{ props.label.clone() }{ required_marker(props.required) }</label>
                <textarea
                    rows="4"
                    style="resize: none;"
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    {oninput}
                />
            </div>
        }
    }
}
