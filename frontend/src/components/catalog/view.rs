//! View rendering for the catalog page.
//!
//! Exactly one of the table, error and loading views is shown, chosen by
//! `CatalogState::view`. The review form and the confirmation banner render
//! below it whenever there is a selected movie or a confirmation.

use common::catalog::state::{CatalogState, CatalogView};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CatalogComponent;
use crate::components::alert::{Alert, Severity};
use crate::components::movie_table::MovieTable;
use crate::components::review_form::ReviewFormComponent;

pub fn view(component: &CatalogComponent, ctx: &Context<CatalogComponent>) -> Html {
    let link = ctx.link();
    let catalog = &component.catalog;

    html! {
        <div class="movies-container">
            <h2>{"Welcome to Movie database!"}</h2>
            <div class="refresh-button-container">
                { refresh_button(link) }
            </div>
            <p>{ format!("Total movies displayed {}", catalog.movie_count) }</p>

            {
                match catalog.view() {
                    CatalogView::Table => build_table(catalog, link),
                    CatalogView::Error => build_error(link),
                    CatalogView::Loading => build_loader(),
                }
            }

            { build_review_form(catalog, link) }
            { build_confirmation(catalog) }
        </div>
    }
}

fn refresh_button(link: &Scope<CatalogComponent>) -> Html {
    html! {
        <button class="button contained" onclick={link.callback(|_| Msg::Refresh)}>
            {"Refresh"}
        </button>
    }
}

fn build_table(catalog: &CatalogState, link: &Scope<CatalogComponent>) -> Html {
    html! {
        <MovieTable
            movies={catalog.movies.clone().unwrap_or_default()}
            companies={catalog.companies.clone()}
            companies_errored={catalog.companies_errored()}
            selected_id={catalog.selected.as_ref().map(|movie| movie.id.clone())}
            on_select={link.callback(Msg::SelectMovie)}
        />
    }
}

fn build_error(link: &Scope<CatalogComponent>) -> Html {
    html! {
        <div class="movies-error-container">
            <Alert message="Unable to Load Movies" severity={Severity::Error} />
            <p>{"Please Refresh"}</p>
            { refresh_button(link) }
        </div>
    }
}

fn build_loader() -> Html {
    html! {
        <div class="loader-container">
            <p>{"Loading..."}</p>
            <div class="spinner" role="progressbar"></div>
        </div>
    }
}

fn build_review_form(catalog: &CatalogState, link: &Scope<CatalogComponent>) -> Html {
    match &catalog.selected {
        Some(movie) => html! {
            <ReviewFormComponent
                movie={movie.clone()}
                open={catalog.review_open}
                on_submit={link.callback(Msg::SubmitReview)}
                on_close={link.callback(|_| Msg::CloseReview)}
            />
        },
        None => html! {},
    }
}

fn build_confirmation(catalog: &CatalogState) -> Html {
    match &catalog.confirmation {
        Some(confirmation) => html! {
            <div class="submit-success-container">
                <Alert message={confirmation.message.clone()} severity={Severity::Success} />
            </div>
        },
        None => html! {},
    }
}
