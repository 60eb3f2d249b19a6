//! Paged request normalization and page metadata projection.

use aegis_core::boxing::{is_blank, trim_space};
use aegis_core::query::{DEFAULT_LIMIT, DEFAULT_PAGE, PageResult, QueryOptions};

use crate::wire::{PageRequest, PageResponse};

/// Translate a wire page request into [`QueryOptions`].
///
/// Page and limit are taken verbatim. A non-empty search is trimmed (it may
/// end up blank). Only the first sort key is honored; a leading `-` means
/// descending. Filters whose value trims to nothing are dropped, the rest
/// are stored trimmed under their original key.
pub fn normalize(req: Option<&PageRequest>) -> QueryOptions {
    let mut opts = QueryOptions::new();
    let Some(req) = req else {
        return opts;
    };

    if let Some(page) = req.page {
        opts.set_page(page);
    }
    if let Some(limit) = req.limit {
        opts.set_limit(limit);
    }

    if let Some(search) = req.search.as_deref().filter(|s| !s.is_empty()) {
        opts.set_search(trim_space(search));
    }

    if let Some(sort) = req.sort.as_deref().filter(|s| !s.is_empty()) {
        let first = trim_space(sort.split(',').next().unwrap_or_default());
        match first.strip_prefix('-') {
            Some(field) => opts.set_order(field, true),
            None => opts.set_order(first, false),
        };
    }

    for (key, value) in &req.filter {
        if is_blank(value) {
            continue;
        }
        opts.add_filter(key.clone(), trim_space(value));
    }

    if req.fetch_all == Some(true) {
        opts.set_fetch_all(true);
    }

    opts
}

/// Project page metadata; an absent result becomes an empty first page.
pub fn to_page_response(page: Option<&PageResult>) -> PageResponse {
    match page {
        None => PageResponse {
            total: Some(0),
            page: Some(DEFAULT_PAGE),
            limit: Some(DEFAULT_LIMIT),
            total_pages: Some(0),
            has_next: Some(false),
            has_prev: Some(false),
        },
        Some(p) => PageResponse {
            total: Some(p.total),
            page: Some(p.page),
            limit: Some(p.limit),
            total_pages: Some(p.total_pages),
            has_next: Some(p.has_next),
            has_prev: Some(p.has_prev),
        },
    }
}
