//! Filter, sort and paginate a fully materialized collection.
use lectern_core::config::ListingConfig;
use lectern_core::{Domain, Listing};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

use crate::query::{Query, SortKey};

/// One rendered page of a listing.
///
/// `total` counts every match, not only those on this page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    pub results: Vec<&'a T>,
    pub total: usize,
    pub page: usize,
    pub page_size: Option<usize>,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn total_pages(&self) -> usize {
        match self.page_size {
            Some(size) => self.total.div_ceil(size),
            None => usize::from(self.total > 0),
        }
    }

    pub fn has_next(&self) -> bool {
        match self.page_size {
            Some(size) => self.page.saturating_mul(size) < self.total,
            None => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQueryEngine {
    page_size: Option<usize>,
}

impl ListQueryEngine {
    /// Pages of at most `page_size` items. A size of 0 is treated as 1.
    pub fn paged(page_size: usize) -> Self {
        Self { page_size: Some(page_size.max(1)) }
    }

    /// Every match on a single page.
    pub fn unbounded() -> Self {
        Self { page_size: None }
    }

    /// Books and articles paginate; news and episodes show everything.
    pub fn for_domain(domain: Domain, listing: &ListingConfig) -> Self {
        match domain {
            Domain::Books => Self::paged(listing.books()),
            Domain::Articles => Self::paged(listing.articles()),
            Domain::News | Domain::Episodes => Self::unbounded(),
        }
    }

    pub fn evaluate<'a, T: Listing>(&self, items: &'a [T], query: &Query) -> Page<'a, T> {
        let mut matched = filter(items, query);
        sort(&mut matched, query.sort);
        let total = matched.len();
        let results = self.slice_page(matched, query.page);
        debug!(
            domain = T::DOMAIN.as_str(),
            term = %query.search_term,
            category = %query.category,
            sort = %query.sort,
            page = query.page,
            total,
            shown = results.len(),
            "evaluated listing query"
        );
        Page { results, total, page: query.page, page_size: self.page_size }
    }

    fn slice_page<'a, T>(&self, mut sorted: Vec<&'a T>, page: usize) -> Vec<&'a T> {
        if page == 0 {
            return Vec::new();
        }
        let Some(size) = self.page_size else {
            return if page == 1 { sorted } else { Vec::new() };
        };
        let start = (page - 1).saturating_mul(size);
        if start >= sorted.len() {
            return Vec::new();
        }
        let end = start.saturating_add(size).min(sorted.len());
        sorted.truncate(end);
        sorted.drain(..start);
        sorted
    }
}

/// Case-insensitive substring match on title, author and the domain's
/// extra fields. The empty term matches everything.
pub fn matches_term<T: Listing>(item: &T, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    let hit = |s: &str| s.to_lowercase().contains(term_lower);
    hit(item.title()) || hit(item.author()) || item.search_fields().any(hit)
}

/// Items matching both the search term and the category filter, in
/// collection order.
pub fn filter<'a, T: Listing>(items: &'a [T], query: &Query) -> Vec<&'a T> {
    let term = query.search_term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_term(*item, &term) && query.category.matches(*item))
        .collect()
}

/// Stable sort; ties keep collection order. Missing metrics rank as 0.
pub fn sort<T: Listing>(items: &mut [&T], key: SortKey) {
    items.sort_by(|a, b| compare(*a, *b, key));
}

fn compare<T: Listing>(a: &T, b: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.publish_date().cmp(&a.publish_date()),
        SortKey::Oldest => a.publish_date().cmp(&b.publish_date()),
        _ => match key.metric() {
            Some(metric) => {
                let av = a.metric(metric).unwrap_or(0.0);
                let bv = b.metric(metric).unwrap_or(0.0);
                bv.total_cmp(&av)
            }
            None => Ordering::Equal,
        },
    }
}
