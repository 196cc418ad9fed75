use yew::{classes, html, AttrValue, Component, Context, Html, Properties};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Error => "alert-error",
            Severity::Success => "alert-success",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub message: AttrValue,
    pub severity: Severity,
}

/// Inline status message used for fetch errors and the review banner.
pub struct Alert;

impl Component for Alert {
    type Message = ();
    type Properties = AlertProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Alert
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class={classes!("alert", props.severity.class())} role="alert">
                { props.message.clone() }
            </div>
        }
    }
}
