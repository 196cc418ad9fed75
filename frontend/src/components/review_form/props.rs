//! Properties for the `ReviewFormComponent`.
//!
//! The catalog page mounts the form only while a movie is selected and
//! controls its visibility through `open`. The form never changes the
//! selection itself; it reports back through the two callbacks.

use common::model::movie::Movie;
use common::requests::ReviewSubmission;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReviewFormProps {
    /// Movie the review is for.
    pub movie: Movie,

    /// Whether the modal is shown. While it is, a window-level mousedown
    /// listener closes it on clicks outside the form.
    pub open: bool,

    /// Receives a validated submission. The page is expected to send it and
    /// close the form.
    pub on_submit: Callback<ReviewSubmission>,

    /// Dismissal via the Close control or an outside click.
    pub on_close: Callback<()>,
}
