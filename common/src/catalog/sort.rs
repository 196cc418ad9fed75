//! Single-column sorting for the movie table.
//!
//! Exactly one column is active at a time. Clicking the active column flips
//! the direction, clicking another column makes it active in ascending
//! order. Sorting is stable in both directions: rows with equal keys keep the
//! order the server sent them in.

use std::cmp::Ordering;

use crate::model::movie::Movie;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Reviews,
    FilmCompany,
}

impl SortColumn {
    /// Header cells in display order.
    pub const ALL: [SortColumn; 3] = [Self::Title, Self::Reviews, Self::FilmCompany];

    /// Header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Reviews => "Review",
            Self::FilmCompany => "Film Company",
        }
    }

    /// Numeric columns are right aligned.
    #[must_use]
    pub const fn numeric(self) -> bool {
        !matches!(self, Self::Title)
    }

    fn compare(self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            Self::Title => a.title.cmp(&b.title),
            Self::Reviews => a.reviews.len().cmp(&b.reviews.len()),
            Self::FilmCompany => a.film_company_id.cmp(&b.film_company_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Screen-reader text for the active header.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ascending => "sorted ascending",
            Self::Descending => "sorted descending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Reviews,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortState {
    /// Applies a header click.
    pub fn set_sort_column(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Direction of `column` if it is the active one.
    #[must_use]
    pub fn direction_of(&self, column: SortColumn) -> Option<SortDirection> {
        (self.column == column).then_some(self.direction)
    }
}

/// Returns a sorted copy of `rows`, leaving the snapshot untouched.
pub fn sorted_rows(rows: &[Movie], sort: SortState) -> Vec<Movie> {
    let mut visible = rows.to_vec();
    visible.sort_by(|a, b| match sort.direction {
        SortDirection::Ascending => sort.column.compare(a, b),
        SortDirection::Descending => sort.column.compare(b, a),
    });
    visible
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn movie(id: &str, title: &str, company: &str, reviews: &[f64]) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            cost: 10.0,
            release_year: 2000,
            film_company_id: company.to_string(),
            reviews: reviews.to_vec(),
        }
    }

    fn ids(rows: &[Movie]) -> Vec<&str> {
        rows.iter().map(|movie| movie.id.as_str()).collect()
    }

    fn rows() -> Vec<Movie> {
        vec![
            movie("1", "Heat", "2", &[8.0, 9.0]),
            movie("2", "Alien", "1", &[7.0]),
            movie("3", "Heat", "1", &[5.0, 6.0]),
            movie("4", "Casablanca", "3", &[7.0, 2.0]),
        ]
    }

    #[test]
    fn starts_on_reviews_ascending() {
        assert_eq!(
            SortState::default(),
            SortState { column: SortColumn::Reviews, direction: SortDirection::Ascending }
        );
    }

    #[test]
    fn same_column_toggles_direction() {
        let mut sort = SortState::default();
        sort.set_sort_column(SortColumn::Reviews);
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.set_sort_column(SortColumn::Reviews);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn new_column_resets_to_ascending() {
        let mut sort = SortState::default();
        sort.set_sort_column(SortColumn::Reviews);
        sort.set_sort_column(SortColumn::Title);
        assert_eq!(
            sort,
            SortState { column: SortColumn::Title, direction: SortDirection::Ascending }
        );
        assert_eq!(sort.direction_of(SortColumn::Title), Some(SortDirection::Ascending));
        assert_eq!(sort.direction_of(SortColumn::Reviews), None);
    }

    #[rstest]
    #[case::ascending(SortDirection::Ascending, &["2", "4", "1", "3"])]
    #[case::descending(SortDirection::Descending, &["1", "3", "4", "2"])]
    fn title_sort_is_stable(#[case] direction: SortDirection, #[case] expected: &[&str]) {
        let sorted = sorted_rows(&rows(), SortState { column: SortColumn::Title, direction });
        assert_eq!(ids(&sorted), expected);
    }

    #[test]
    fn reviews_sort_on_review_count() {
        let rows = vec![
            movie("three_low", "A", "1", &[1.0, 1.0, 1.0]),
            movie("one_high", "B", "1", &[9.0]),
            movie("ten", "C", "1", &[10.0]),
            movie("none", "D", "1", &[]),
        ];

        let ascending = sorted_rows(&rows, SortState::default());
        assert_eq!(ids(&ascending), ["none", "one_high", "ten", "three_low"]);

        let descending = SortState { column: SortColumn::Reviews, direction: SortDirection::Descending };
        assert_eq!(ids(&sorted_rows(&rows, descending)), ["three_low", "one_high", "ten", "none"]);
    }

    #[test]
    fn reviews_sort_keeps_server_order_for_equal_counts() {
        let sorted = sorted_rows(&rows(), SortState::default());
        // "2" has one review; the other three have two each.
        assert_eq!(ids(&sorted), ["2", "1", "3", "4"]);
    }

    #[test]
    fn company_sort_uses_identifier() {
        let sort = SortState { column: SortColumn::FilmCompany, direction: SortDirection::Ascending };
        assert_eq!(ids(&sorted_rows(&rows(), sort)), ["2", "3", "1", "4"]);
    }

    #[test]
    fn sorting_leaves_snapshot_untouched() {
        let snapshot = rows();
        let _ = sorted_rows(&snapshot, SortState::default());
        assert_eq!(ids(&snapshot), ["1", "2", "3", "4"]);
    }
}
