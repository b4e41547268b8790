//! "Customize your order" page.
//!
//! The page is a thin Yew shell around [`common::order::OrderComposer`]:
//! inputs forward raw values with `Msg::SetField`, and `Msg::Submit` runs the
//! composer, then either reports the validation notices or hands the order
//! off to WhatsApp.
//!
//! Submodules follow the usual split: `state` (component struct), `messages`,
//! `update` (Elm-style reducer), `view` and `helpers` (DOM side effects).

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CustomizeComponent;

impl Component for CustomizeComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CustomizeComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
