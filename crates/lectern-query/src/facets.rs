//! Category options and counts for the category-select control.
use lectern_core::Listing;

use crate::engine::matches_term;
use crate::query::{Query, ALL_CATEGORIES};

/// `"all"` followed by each distinct category in first-appearance order.
/// Items with several categories (book genres) contribute every one.
pub fn category_options<T: Listing>(items: &[T]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for category in items.iter().flat_map(|item| item.categories()) {
        if !options[1..].iter().any(|c| c == category) {
            options.push(category.to_string());
        }
    }
    options
}

/// `("all", n)` then per-category counts of items matching the search
/// term, lined up with [`category_options`]. The query's category axis is
/// ignored so every option shows what selecting it yields.
pub fn category_counts<T: Listing>(items: &[T], query: &Query) -> Vec<(String, usize)> {
    let term = query.search_term.to_lowercase();
    let mut counts: Vec<(String, usize)> = vec![(ALL_CATEGORIES.to_string(), 0)];
    for item in items {
        let hit = usize::from(matches_term(item, &term));
        counts[0].1 += hit;
        for category in item.categories() {
            match counts[1..].iter_mut().find(|(c, _)| c == category) {
                Some((_, n)) => *n += hit,
                None => counts.push((category.to_string(), hit)),
            }
        }
    }
    counts
}
