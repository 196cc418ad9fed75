//! Shared model and catalog logic for the movie catalog viewer.
//!
//! Everything in here is free of browser bindings so it builds for both the
//! wasm frontend and native test runs.

pub mod catalog;
pub mod error;
pub mod model;
pub mod requests;
