use common::catalog::review::{FieldErrors, ReviewDraft};
use yew::prelude::*;

use super::outside_click::OutsideClickListener;

/// Runtime state of the review form.
pub struct ReviewFormComponent {
    /// Values typed so far.
    pub draft: ReviewDraft,

    /// Errors from the last validation pass.
    pub errors: FieldErrors,

    /// Set after the first submit attempt; from then on every edit
    /// re-validates so errors clear as soon as the field is fixed.
    pub submitted: bool,

    /// The form's bounding box, used to tell inside clicks from outside ones.
    pub wrapper_ref: NodeRef,

    /// Present exactly while the modal is open.
    pub outside_click: Option<OutsideClickListener>,
}

impl ReviewFormComponent {
    pub fn new() -> Self {
        Self {
            draft: ReviewDraft::default(),
            errors: FieldErrors::default(),
            submitted: false,
            wrapper_ref: NodeRef::default(),
            outside_click: None,
        }
    }

    /// Clears values and errors, e.g. when a different movie is selected.
    pub fn reset(&mut self) {
        self.draft = ReviewDraft::default();
        self.errors = FieldErrors::default();
        self.submitted = false;
    }
}
