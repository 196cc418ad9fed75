//! View rendering for the review form.
//!
//! Layout follows the modal sheet: a close control, the selected title, the
//! rating select, the message textarea, and field errors under each field.

use common::catalog::review::{parse_rating, rating_options};
use common::model::movie::Movie;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::messages::Msg;
use super::state::ReviewFormComponent;
use crate::tops_sheet::modal_sheet::ModalSheet;

pub fn view(component: &ReviewFormComponent, ctx: &Context<ReviewFormComponent>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let draft = &component.draft;

    html! {
        <ModalSheet open={props.open}>
            <div ref={component.wrapper_ref.clone()} class="review-form-wrapper">
                <div class="close-wrapper">
                    <span class="close" onclick={link.callback(|_| Msg::Close)}>{"Close"}</span>
                </div>
                <p class="selected-title">{ selection_heading(&props.movie) }</p>
                <p>{"Please leave a review below"}</p>
                <form
                    novalidate={true}
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <select
                        name="rating"
                        aria-label="Rating"
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            Msg::SetRating(parse_rating(&select.value()))
                        })}
                    >
                        <option value="" selected={draft.rating.is_none()}>{"Select a rating"}</option>
                        {
                            for rating_options().map(|value| html! {
                                <option value={value.to_string()} selected={draft.rating == Some(value)}>
                                    { format!("{value:.1}") }
                                </option>
                            })
                        }
                    </select>
                    { field_error(component.errors.rating) }
                    <textarea
                        name="message"
                        placeholder="Please enter your review..."
                        value={draft.message.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::SetMessage(textarea.value())
                        })}
                    />
                    { field_error(component.errors.message) }
                    <button class="button contained" type="submit">{"Submit"}</button>
                </form>
            </div>
        </ModalSheet>
    }
}

fn selection_heading(movie: &Movie) -> String {
    if movie.title.is_empty() {
        "No Movie Title".to_string()
    } else {
        format!("You have selected {}", movie.title)
    }
}

fn field_error(error: Option<&'static str>) -> Html {
    match error {
        Some(message) => html! { <span class="error">{ message }</span> },
        None => html! {},
    }
}
