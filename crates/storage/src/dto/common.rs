use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

use crate::services::pagination::PageWindow;

/// Raw page token as sent by the client. Kept as a string so that garbage
/// input degrades to a valid page instead of failing extraction.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Value of the last occurrence of `key` in decoded query pairs
pub(crate) fn last_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Built from raw query pairs; a repeated `page` keeps its last value.
impl From<Vec<(String, String)>> for PageQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            page: last_value(&pairs, "page"),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<PageWindow> for PaginationMeta {
    fn from(window: PageWindow) -> Self {
        Self {
            page: window.number,
            page_size: window.per_page,
            total_items: window.total_items,
            total_pages: window.num_pages,
            has_next: window.has_next(),
            has_previous: window.has_previous(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, window: PageWindow) -> Self {
        Self {
            data,
            pagination: PaginationMeta::from(window),
        }
    }
}
