//! Request wizard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Own the single `Session` of the app (see `state.rs`).
//! - Delegate messages to `update::update` and rendering to `view::view`.
//! - Route the active `Flow` to the home, purchase, diary or success screens
//!   in `screens/`.

mod helpers;
mod messages;
mod screens;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::RequestWizard;

use yew::prelude::*;

impl Component for RequestWizard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        RequestWizard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
