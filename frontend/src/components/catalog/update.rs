//! Message handling for the catalog page.
//!
//! Network calls are spawned on the browser event loop and report back with
//! the generation they were issued under; `CatalogState` decides whether the
//! result is still current.

use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::CatalogComponent;

pub fn update(component: &mut CatalogComponent, ctx: &Context<CatalogComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Refresh => {
            let generation = component.catalog.refresh();

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::list_companies().await;
                link.send_message(Msg::CompaniesFetched(generation, result));
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::list_movies().await;
                link.send_message(Msg::MoviesFetched(generation, result));
            });
            true
        }
        Msg::CompaniesFetched(generation, result) => {
            let applied = component.catalog.companies_fetched(generation, result);
            if !applied {
                log!("Discarded stale companies response.");
            }
            applied
        }
        Msg::MoviesFetched(generation, result) => {
            let applied = component.catalog.movies_fetched(generation, result);
            if !applied {
                log!("Discarded stale movies response.");
            }
            applied
        }
        Msg::SelectMovie(movie) => {
            component.catalog.select_movie(movie);
            true
        }
        Msg::CloseReview => {
            if !component.catalog.review_open {
                return false;
            }
            component.catalog.close_review();
            true
        }
        Msg::SubmitReview(submission) => {
            let generation = component.catalog.review_sent();
            log!("Submitting review for", submission.movie_title.clone());

            let link = ctx.link().clone();
            spawn_local(async move {
                let confirmation = api::submit_review(&submission).await;
                link.send_message(Msg::ReviewConfirmed(generation, confirmation));
            });
            true
        }
        Msg::ReviewConfirmed(generation, confirmation) => {
            component.catalog.review_confirmed(generation, confirmation)
        }
    }
}
