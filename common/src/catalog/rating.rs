/// Text shown in place of an average when a movie has no reviews yet.
pub const NO_RATINGS: &str = "No ratings";

/// Mean of `ratings` rounded to one decimal place, or `None` when empty.
pub fn average(ratings: &[f64]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Renders an average for the table, e.g. `8.0` or [`NO_RATINGS`].
pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{value:.1}"),
        None => NO_RATINGS.to_string(),
    }
}
