//! Normalized list-query options and page metadata shared with the DAL.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i32 = 1;
pub const DEFAULT_LIMIT: i32 = 20;

/// A paged, searchable, sortable and filterable query in normalized form.
///
/// Page and limit are carried verbatim; clamping them is up to the data
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    pub page: i32,
    pub limit: i32,
    pub search: Option<String>,
    pub order_field: Option<String>,
    pub order_descending: bool,
    pub filters: BTreeMap<String, String>,
    pub fetch_all: bool,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
            order_field: None,
            order_descending: false,
            filters: BTreeMap::new(),
            fetch_all: false,
        }
    }

    pub fn set_page(&mut self, page: i32) -> &mut Self {
        self.page = page;
        self
    }

    pub fn set_limit(&mut self, limit: i32) -> &mut Self {
        self.limit = limit;
        self
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> &mut Self {
        self.search = Some(search.into());
        self
    }

    pub fn set_order(&mut self, field: impl Into<String>, descending: bool) -> &mut Self {
        self.order_field = Some(field.into());
        self.order_descending = descending;
        self
    }

    pub fn add_filter(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn set_fetch_all(&mut self, fetch_all: bool) -> &mut Self {
        self.fetch_all = fetch_all;
        self
    }

    /// Zero-based row offset for the requested page. Pages below 1 are
    /// treated as the first page.
    pub fn offset(&self) -> u64 {
        let page = self.page.max(1) as u64 - 1;
        page * self.limit.max(0) as u64
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Page metadata returned with every list result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub total: i64,
    pub page: i32,
    pub limit: i32,
    pub total_pages: i32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageResult {
    /// Derive page counts and navigation flags from a total.
    pub fn new(total: i64, page: i32, limit: i32) -> Self {
        let total = total.max(0);
        let total_pages = if limit <= 0 {
            0
        } else {
            let pages = total.unsigned_abs().div_ceil(u64::from(limit.unsigned_abs()));
            i32::try_from(pages).unwrap_or(i32::MAX)
        };
        Self {
            total,
            page,
            limit,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Metadata for a query that returned everything in one page.
    pub fn single_page(total: i64) -> Self {
        let limit = i32::try_from(total.max(0)).unwrap_or(i32::MAX);
        Self::new(total, DEFAULT_PAGE, limit)
    }
}

/// A page of items plus its metadata.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub page: PageResult,
}

impl<T> PaginatedResult<T> {
    /// Slice an already-ordered collection according to `options`.
    pub fn from_slice(all: Vec<T>, options: &QueryOptions) -> Self {
        let total = all.len() as i64;
        if options.fetch_all {
            return Self {
                items: all,
                page: PageResult::single_page(total),
            };
        }
        let items = all
            .into_iter()
            .skip(options.offset() as usize)
            .take(options.limit.max(0) as usize)
            .collect();
        Self {
            items,
            page: PageResult::new(total, options.page, options.limit),
        }
    }
}
