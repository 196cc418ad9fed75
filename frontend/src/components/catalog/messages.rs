use common::catalog::state::Generation;
use common::error::FetchError;
use common::model::company::Company;
use common::model::movie::Movie;
use common::requests::{ReviewConfirmation, ReviewSubmission};

pub enum Msg {
    Refresh,
    CompaniesFetched(Generation, Result<Vec<Company>, FetchError>),
    MoviesFetched(Generation, Result<Vec<Movie>, FetchError>),
    SelectMovie(Movie),
    CloseReview,
    SubmitReview(ReviewSubmission),
    ReviewConfirmed(Generation, Option<ReviewConfirmation>),
}
