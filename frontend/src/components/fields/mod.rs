//! Form field primitives shared by every screen.
//!
//! Each field renders its label (with a red `*` when required) and reports
//! the new value through an `on_change` callback; the owning component keeps
//! the value.

mod counter;
mod input;
mod select;
mod step_action;
mod textarea;

pub use counter::CounterField;
pub use input::InputField;
pub use select::SelectField;
pub use step_action::StepAction;
pub use textarea::TextAreaField;

use yew::{html, Html};

fn required_marker(required: bool) -> Html {
    if required {
        html! { <span class="required">{ " *" }</span> }
    } else {
        html! {}
    }
}
