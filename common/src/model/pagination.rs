use serde::{Deserialize, Serialize};

/// Metadata attached to every paginated listing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(total: u64, page: u64, limit: u64) -> Pagination {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Pagination {
            total,
            page,
            limit,
            total_pages,
        }
    }
}
