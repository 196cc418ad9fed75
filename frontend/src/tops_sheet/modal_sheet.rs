use yew::{classes, html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
}

/// Full-screen sheet with a dimming overlay. Visibility is purely a CSS
/// class, so the children stay mounted while the sheet is hidden.
pub struct ModalSheet;

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        ModalSheet
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class={classes!("review-form-container", props.open.then_some("active"))}>
                <div class="overlay"></div>
                { props.children.clone() }
            </div>
        }
    }
}
