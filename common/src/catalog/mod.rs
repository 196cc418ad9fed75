//! Pure catalog logic shared by the frontend components.
//!
//! - `rating`: average of a movie's review scores.
//! - `company`: company-name lookup against the last fetched list.
//! - `sort`: single-column sort state and the stable row comparator.
//! - `review`: review-form draft and its field validation.
//! - `state`: the orchestrator's application state and its transitions.

pub mod company;
pub mod rating;
pub mod review;
pub mod sort;
pub mod state;
