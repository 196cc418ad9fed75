use common::catalog::state::CatalogState;

/// Top-level component state: the catalog snapshot plus a one-time guard for
/// the initial fetch.
pub struct CatalogComponent {
    pub catalog: CatalogState,

    /// Set once the first-render fetch has been issued.
    pub loaded: bool,
}

impl CatalogComponent {
    pub fn new() -> Self {
        Self {
            catalog: CatalogState::new(),
            loaded: false,
        }
    }
}
