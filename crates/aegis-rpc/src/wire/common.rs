use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Generic paged list request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<i32>,
    pub limit: Option<i32>,
    pub search: Option<String>,
    /// `field` or `-field`, optionally followed by ignored `,other` keys.
    pub sort: Option<String>,
    #[serde(default)]
    pub filter: BTreeMap<String, String>,
    pub fetch_all: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageResponse {
    pub total: Option<i64>,
    pub page: Option<i32>,
    pub limit: Option<i32>,
    pub total_pages: Option<i32>,
    pub has_next: Option<bool>,
    pub has_prev: Option<bool>,
}
