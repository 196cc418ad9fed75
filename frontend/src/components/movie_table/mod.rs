//! Sortable movie table. Owns the active `SortState`; everything else comes
//! in through props from the catalog page.

use common::catalog::sort::SortState;
use yew::prelude::*;

mod messages;
mod props;
mod view;

pub use messages::Msg;
pub use props::MovieTableProps;

pub struct MovieTable {
    pub sort: SortState,
}

impl Component for MovieTable {
    type Message = Msg;
    type Properties = MovieTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            sort: SortState::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Sort(column) => {
                self.sort.set_sort_column(column);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
