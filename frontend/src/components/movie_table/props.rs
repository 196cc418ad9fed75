//! Properties for the `MovieTable` component.

use common::model::company::Company;
use common::model::movie::Movie;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MovieTableProps {
    /// Current movie snapshot in server order. The table sorts a copy.
    pub movies: Vec<Movie>,

    /// Company snapshot used to resolve the "Film Company" column, absent
    /// until loaded or after a failed fetch.
    #[prop_or_default]
    pub companies: Option<Vec<Company>>,

    /// When set, every company cell shows an error instead of a name.
    #[prop_or_default]
    pub companies_errored: bool,

    /// Id of the highlighted row.
    #[prop_or_default]
    pub selected_id: Option<String>,

    /// Fired with the clicked row.
    pub on_select: Callback<Movie>,
}
