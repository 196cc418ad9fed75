use common::catalog::sort::SortColumn;

pub enum Msg {
    Sort(SortColumn),
}
