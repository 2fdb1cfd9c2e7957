use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Shows the round back button in the corner when set.
    #[prop_or_default]
    pub on_back: Option<Callback<MouseEvent>>,
    /// Zero-based screen index and screen count.
    #[prop_or_default]
    pub progress: Option<(usize, usize)>,
    #[prop_or_default]
    pub children: Html,
}

/// The card every screen is rendered in.
pub struct Layout;

impl Component for Layout {
    type Message = ();
    type Properties = LayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Layout
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="card">
                <div class="card-accent"></div>
                {
                    if let Some(on_back) = &props.on_back {
                        html! {
                            <button class="back-btn" title="Voltar" onclick={on_back.clone()}>{ "‹" }</button>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="card-body">
                    {
                        if let Some((index, count)) = props.progress {
                            html! { <div class="progress">{ format!("ETAPA {} DE {}", index + 1, count) }</div> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if let Some(title) = &props.title {
                            html! { <h2 class="card-title">{ title.clone() }</h2> }
                        } else {
                            html! {}
                        }
                    }
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
