//! Review form draft and validation.
//!
//! The frontend keeps a [`ReviewDraft`] while the modal is open and calls
//! [`ReviewDraft::submit`] on the submit button. Any field error blocks the
//! submission and is rendered next to its field.

use crate::model::movie::Movie;
use crate::requests::ReviewSubmission;

pub const RATING_REQUIRED: &str = "Please Select a Rating.";
pub const TOO_MANY_CHARACTERS: &str = "Too Many Characters";
pub const MAX_MESSAGE_CHARS: usize = 100;
pub const MAX_RATING: f64 = 10.0;
pub const RATING_STEP: f64 = 0.5;

/// Selectable ratings from 0 to 10 in half steps.
pub fn rating_options() -> impl Iterator<Item = f64> {
    let steps = (MAX_RATING / RATING_STEP) as u32;
    (0..=steps).map(|step| f64::from(step) * RATING_STEP)
}

/// Parses the rating control's value. An empty or off-grid value is unset.
pub fn parse_rating(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    let on_grid = (value / RATING_STEP).fract() == 0.0;
    ((0.0..=MAX_RATING).contains(&value) && on_grid).then_some(value)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub rating: Option<f64>,
    pub message: String,
}

/// Field-level validation messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub rating: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.message.is_none()
    }
}

impl ReviewDraft {
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            rating: self.rating.is_none().then_some(RATING_REQUIRED),
            message: (self.message.chars().count() > MAX_MESSAGE_CHARS)
                .then_some(TOO_MANY_CHARACTERS),
        }
    }

    /// Builds the request for `movie`, or the errors that block it.
    pub fn submit(&self, movie: &Movie) -> Result<ReviewSubmission, FieldErrors> {
        let errors = self.validate();
        match self.rating {
            Some(review) if errors.is_empty() => Ok(ReviewSubmission {
                movie_id: movie.id.clone(),
                movie_title: movie.title.clone(),
                message: self.message.clone(),
                review,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn movie() -> Movie {
        Movie {
            id: "4".to_string(),
            title: "Alien".to_string(),
            cost: 11.0,
            release_year: 1979,
            film_company_id: "1".to_string(),
            reviews: vec![9.0],
        }
    }

    #[test]
    fn unset_rating_blocks_submission() {
        let draft = ReviewDraft { rating: None, message: "Loved it".to_string() };

        let errors = draft.submit(&movie()).unwrap_err();
        assert_eq!(errors.rating, Some(RATING_REQUIRED));
        assert_eq!(errors.message, None);
    }

    #[test]
    fn long_message_blocks_submission() {
        let draft = ReviewDraft { rating: Some(6.5), message: "x".repeat(101) };

        let errors = draft.submit(&movie()).unwrap_err();
        assert_eq!(errors.message, Some(TOO_MANY_CHARACTERS));
        assert_eq!(errors.rating, None);
    }

    #[test]
    fn reports_every_failing_field() {
        let draft = ReviewDraft { rating: None, message: "é".repeat(101) };
        assert_eq!(
            draft.validate(),
            FieldErrors { rating: Some(RATING_REQUIRED), message: Some(TOO_MANY_CHARACTERS) }
        );
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let draft = ReviewDraft { rating: Some(3.0), message: "é".repeat(100) };
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn valid_draft_builds_submission() {
        let draft = ReviewDraft { rating: Some(8.5), message: String::new() };

        let submission = draft.submit(&movie()).unwrap();
        assert_eq!(
            submission,
            ReviewSubmission {
                movie_id: "4".to_string(),
                movie_title: "Alien".to_string(),
                message: String::new(),
                review: 8.5,
            }
        );
    }

    #[rstest]
    #[case::empty("", None)]
    #[case::zero("0", Some(0.0))]
    #[case::half("7.5", Some(7.5))]
    #[case::max("10", Some(10.0))]
    #[case::off_grid("7.25", None)]
    #[case::too_high("10.5", None)]
    #[case::negative("-1", None)]
    #[case::garbage("five", None)]
    fn parses_rating_control_value(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_rating(raw), expected);
    }

    #[test]
    fn offers_twenty_one_half_steps() {
        let options: Vec<f64> = rating_options().collect();
        assert_eq!(options.len(), 21);
        assert_eq!(options.first(), Some(&0.0));
        assert_eq!(options.last(), Some(&10.0));
    }
}
