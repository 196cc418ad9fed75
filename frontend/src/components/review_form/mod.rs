//! Review form shown in a modal sheet for the selected movie.
//!
//! Besides delegating to `update` and `view`, the `Component` implementation
//! keeps the outside-click listener in step with the `open` prop: it is
//! attached after a render with the modal open and dropped as soon as the
//! modal closes or the form unmounts.

use yew::prelude::*;

mod messages;
mod outside_click;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ReviewFormProps;
pub use state::ReviewFormComponent;

use outside_click::OutsideClickListener;

impl Component for ReviewFormComponent {
    type Message = Msg;
    type Properties = ReviewFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReviewFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().movie.id != old_props.movie.id {
            self.reset();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        match (ctx.props().open, self.outside_click.is_some()) {
            (true, false) => {
                let on_close = ctx.link().callback(|_| Msg::Close);
                self.outside_click = OutsideClickListener::attach(self.wrapper_ref.clone(), on_close);
            }
            (false, true) => self.outside_click = None,
            _ => {}
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.outside_click = None;
    }
}
