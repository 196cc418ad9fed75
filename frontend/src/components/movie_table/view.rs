//! View rendering for the sortable movie table.
//!
//! Rows are re-sorted from the props snapshot on every render, so a refresh
//! that replaces the movies is reflected under the current sort.

use common::catalog::company::resolve_company_name;
use common::catalog::rating::{average, format_average};
use common::catalog::sort::{sorted_rows, SortColumn, SortDirection, SortState};
use common::model::movie::Movie;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::props::MovieTableProps;
use super::MovieTable;
use crate::components::alert::{Alert, Severity};

const STAR_COUNT: u8 = 10;

pub fn view(component: &MovieTable, ctx: &Context<MovieTable>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let rows = sorted_rows(&props.movies, component.sort);

    html! {
        <div class="table-container">
            <table class="movie-table">
                <thead>
                    <tr>
                        { for SortColumn::ALL.into_iter().map(|column| header_cell(column, component.sort, link)) }
                    </tr>
                </thead>
                <tbody>
                    { for rows.into_iter().map(|movie| body_row(movie, props)) }
                </tbody>
            </table>
        </div>
    }
}

fn header_cell(column: SortColumn, sort: SortState, link: &Scope<MovieTable>) -> Html {
    let direction = sort.direction_of(column);
    let (aria_sort, arrow) = match direction {
        Some(SortDirection::Ascending) => ("ascending", "▲"),
        Some(SortDirection::Descending) => ("descending", "▼"),
        None => ("none", ""),
    };

    html! {
        <th class={classes!("table-head", column.numeric().then_some("numeric"))} aria-sort={aria_sort}>
            <button
                class={classes!("sort-label", direction.is_some().then_some("active"))}
                onclick={link.callback(move |_| Msg::Sort(column))}
            >
                { column.label() }
                <span class="sort-arrow">{ arrow }</span>
                {
                    match direction {
                        Some(direction) => html! {
                            <span class="visually-hidden">{ direction.description() }</span>
                        },
                        None => html! {},
                    }
                }
            </button>
        </th>
    }
}

fn body_row(movie: Movie, props: &MovieTableProps) -> Html {
    let selected = props.selected_id.as_deref() == Some(movie.id.as_str());
    let rating = average(&movie.reviews);
    let company = if props.companies_errored {
        html! { <Alert message="Unable to Fetch." severity={Severity::Error} /> }
    } else {
        let name = resolve_company_name(props.companies.as_deref(), &movie.film_company_id);
        html! { <>{ name }</> }
    };
    let onclick = {
        let on_select = props.on_select.clone();
        let movie = movie.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(movie.clone()))
    };

    html! {
        <tr key={movie.id.clone()} class={classes!("table-row", selected.then_some("selected"))} {onclick}>
            <th scope="row">{ movie.title.clone() }</th>
            <td class="numeric">
                <div class="rating-container">
                    { rating_meter(rating) }
                    <span class="number">{ format!("({})", format_average(rating)) }</span>
                </div>
            </td>
            <td class="numeric">{ company }</td>
        </tr>
    }
}

fn rating_meter(rating: Option<f64>) -> Html {
    let value = rating.unwrap_or(0.0);
    let label = format!("{} out of {STAR_COUNT}", format_average(rating));

    html! {
        <span class="rating" role="img" aria-label={label}>
            {
                for (0..STAR_COUNT).map(|slot| {
                    let fill = star_fill(value - f64::from(slot));
                    html! { <span class={classes!("star", fill)}>{"★"}</span> }
                })
            }
        </span>
    }
}

// Half-star precision, matching the half steps of the review form.
fn star_fill(remaining: f64) -> &'static str {
    if remaining >= 0.75 {
        "full"
    } else if remaining >= 0.25 {
        "half"
    } else {
        "empty"
    }
}
