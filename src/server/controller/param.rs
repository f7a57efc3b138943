//! Query parameters shared across controllers.

use serde::Deserialize;

/// Pagination query parameters, `?page=&per_page=`.
///
/// Pages are zero-indexed.
#[derive(Deserialize)]
pub struct PaginationParam {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}
