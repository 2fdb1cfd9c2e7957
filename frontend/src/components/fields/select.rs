use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::required_marker;

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub options: Vec<AttrValue>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub required: bool,
}

pub struct SelectField;

impl Component for SelectField {
    type Message = ();
    type Properties = SelectFieldProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SelectField
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_change = props.on_change.clone();
        let onchange = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        });

        html! {
            <div class="field">
                <label>{ props.label.clone() }{ required_marker(props.required) }</label>
                <select {onchange}>
                    { for props.options.iter().map(|option| html! {
                        <option value={option.clone()} selected={*option == props.value}>
                            { option.clone() }
                        </option>
                    }) }
                </select>
            </div>
        }
    }
}
