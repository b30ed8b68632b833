use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

use super::common::{PaginationMeta, last_value};
use crate::services::pagination::PageWindow;

/// Query for the generic record browser
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminBrowseQuery {
    /// Case-insensitive substring matched against the entity's search fields
    pub q: Option<String>,
    pub page: Option<String>,
}

impl From<Vec<(String, String)>> for AdminBrowseQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            q: last_value(&pairs, "q"),
            page: last_value(&pairs, "page"),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EntityAdminInfo {
    pub entity: &'static str,
    pub list_display: Vec<&'static str>,
    pub search_fields: Vec<&'static str>,
}

/// One page of browsed records; each row holds the entity's `list_display` columns
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminPage {
    pub data: Vec<serde_json::Value>,
    pub pagination: PaginationMeta,
}

impl AdminPage {
    pub fn new(data: Vec<serde_json::Value>, window: PageWindow) -> Self {
        Self {
            data,
            pagination: PaginationMeta::from(window),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_query_takes_last_of_repeated_params() {
        let query = AdminBrowseQuery::from(vec![
            ("q".to_string(), "zen".to_string()),
            ("page".to_string(), "3".to_string()),
            ("q".to_string(), "spar".to_string()),
        ]);
        assert_eq!(query.q.as_deref(), Some("spar"));
        assert_eq!(query.page.as_deref(), Some("3"));
    }
}
