//! Update function for the review form.
//!
//! Validation runs on submit; after the first attempt it also runs on every
//! edit. A valid draft is handed to the parent and the form resets.

use yew::prelude::*;

use super::messages::Msg;
use super::state::ReviewFormComponent;

pub fn update(
    component: &mut ReviewFormComponent,
    ctx: &Context<ReviewFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetRating(rating) => {
            component.draft.rating = rating;
            revalidate(component);
            true
        }
        Msg::SetMessage(message) => {
            component.draft.message = message;
            revalidate(component);
            true
        }
        Msg::Submit => {
            match component.draft.submit(&ctx.props().movie) {
                Ok(submission) => {
                    component.reset();
                    ctx.props().on_submit.emit(submission);
                }
                Err(errors) => {
                    component.errors = errors;
                    component.submitted = true;
                }
            }
            true
        }
        Msg::Close => {
            ctx.props().on_close.emit(());
            false
        }
    }
}

fn revalidate(component: &mut ReviewFormComponent) {
    if component.submitted {
        component.errors = component.draft.validate();
    }
}
