//! Catalog page: owns the application state, issues the fetches, and wires
//! the movie table to the review form.
//!
//! The `Component` implementation only delegates: `update::update` applies
//! messages to the `CatalogState`, `view::view` renders one of the loading,
//! error or table views around it.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CatalogComponent;

impl Component for CatalogComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CatalogComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Refresh);
        }
    }
}
