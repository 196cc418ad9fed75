//! Application state owned by the top-level catalog component.
//!
//! Every refresh starts a new generation. Fetches and submissions remember
//! the generation they were issued under; a completion carrying an older
//! generation is dropped so it cannot overwrite a newer snapshot.

use crate::error::FetchError;
use crate::model::company::Company;
use crate::model::movie::Movie;
use crate::requests::ReviewConfirmation;

/// Refresh counter a request was issued under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Loaded,
    Errored,
}

/// The mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogView {
    Table,
    Error,
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub companies: Option<Vec<Company>>,
    pub companies_status: FetchStatus,
    pub movies: Option<Vec<Movie>>,
    pub movies_status: FetchStatus,
    /// Shown as "Total movies displayed"; zero after a failed movie fetch.
    pub movie_count: usize,
    pub selected: Option<Movie>,
    pub review_open: bool,
    pub confirmation: Option<ReviewConfirmation>,
    generation: Generation,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            companies: None,
            companies_status: FetchStatus::Loading,
            movies: None,
            movies_status: FetchStatus::Loading,
            movie_count: 0,
            selected: None,
            review_open: false,
            confirmation: None,
            generation: Generation::default(),
        }
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Starts a new generation and returns it for tagging both fetches.
    ///
    /// Snapshots stay on screen until their replacements arrive, and a
    /// companies error keeps flagging the company cells until the new
    /// response lands. Selection, modal and confirmation reset immediately.
    pub fn refresh(&mut self) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        if self.companies_status != FetchStatus::Errored {
            self.companies_status = FetchStatus::Loading;
        }
        self.movies_status = FetchStatus::Loading;
        self.clear_selection();
        self.confirmation = None;
        self.generation
    }

    /// Applies a companies fetch. Returns `false` when the result was stale.
    pub fn companies_fetched(
        &mut self,
        generation: Generation,
        result: Result<Vec<Company>, FetchError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(companies) => {
                self.companies = Some(companies);
                self.companies_status = FetchStatus::Loaded;
            }
            Err(_) => {
                self.companies = None;
                self.companies_status = FetchStatus::Errored;
            }
        }
        true
    }

    /// Applies a movies fetch. Returns `false` when the result was stale.
    pub fn movies_fetched(
        &mut self,
        generation: Generation,
        result: Result<Vec<Movie>, FetchError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(movies) => {
                self.movie_count = movies.len();
                self.movies = Some(movies);
                self.movies_status = FetchStatus::Loaded;
            }
            Err(_) => {
                self.movie_count = 0;
                self.movies = None;
                self.movies_status = FetchStatus::Errored;
            }
        }
        true
    }

    /// Row click: selects `movie` and toggles the review modal.
    pub fn select_movie(&mut self, movie: Movie) {
        self.selected = Some(movie);
        self.review_open = !self.review_open;
    }

    /// Hides the modal without touching the selection.
    pub fn close_review(&mut self) {
        self.review_open = false;
    }

    /// Called once a valid review has been handed to the client. The form
    /// goes away whatever the eventual outcome.
    pub fn review_sent(&mut self) -> Generation {
        self.clear_selection();
        self.generation
    }

    /// Applies a submission outcome. `None` means the submission failed and
    /// there is nothing to show. Returns `false` when the result was stale.
    pub fn review_confirmed(
        &mut self,
        generation: Generation,
        confirmation: Option<ReviewConfirmation>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        if confirmation.is_some() {
            self.confirmation = confirmation;
        }
        true
    }

    #[must_use]
    pub fn is_selected(&self, movie: &Movie) -> bool {
        self.selected.as_ref().is_some_and(|selected| selected.id == movie.id)
    }

    #[must_use]
    pub fn companies_errored(&self) -> bool {
        self.companies_status == FetchStatus::Errored
    }

    #[must_use]
    pub fn view(&self) -> CatalogView {
        if self.movies.is_some() {
            CatalogView::Table
        } else if self.movies_status == FetchStatus::Errored {
            CatalogView::Error
        } else {
            CatalogView::Loading
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.review_open = false;
    }
}
