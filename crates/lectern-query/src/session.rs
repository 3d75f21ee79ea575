//! Query state owned by a single listing view.
//!
//! A session is created with the default query when the view opens and
//! is mutated only through [`ListingEvent`]s. Any change to the search
//! term, category or sort order sends the view back to page 1.
use lectern_core::Listing;

use crate::engine::{ListQueryEngine, Page};
use crate::query::{CategoryFilter, Query, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    SetSearch(String),
    SelectCategory(CategoryFilter),
    /// Flip one chip of the multi-select category bar.
    ToggleCategory(String),
    SetSort(SortKey),
    NextPage,
    PreviousPage,
    GoToPage(usize),
    Reset,
}

#[derive(Debug, Clone)]
pub struct ListingSession {
    engine: ListQueryEngine,
    query: Query,
}

impl ListingSession {
    pub fn new(engine: ListQueryEngine) -> Self {
        Self { engine, query: Query::default() }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Apply one input event. `items` is the collection the view renders;
    /// it bounds `NextPage`.
    pub fn apply<T: Listing>(&mut self, items: &[T], event: ListingEvent) {
        match event {
            ListingEvent::SetSearch(term) => {
                self.query.search_term = term;
                self.query.page = 1;
            }
            ListingEvent::SelectCategory(category) => {
                self.query.category = category;
                self.query.page = 1;
            }
            ListingEvent::ToggleCategory(name) => {
                self.toggle_category(name);
                self.query.page = 1;
            }
            ListingEvent::SetSort(sort) => {
                self.query.sort = sort;
                self.query.page = 1;
            }
            ListingEvent::NextPage => {
                if self.view(items).has_next() {
                    self.query.page += 1;
                }
            }
            ListingEvent::PreviousPage => {
                self.query.page = self.query.page.saturating_sub(1).max(1);
            }
            ListingEvent::GoToPage(page) => self.query.page = page,
            ListingEvent::Reset => self.query = Query::default(),
        }
    }

    pub fn view<'a, T: Listing>(&self, items: &'a [T]) -> Page<'a, T> {
        self.engine.evaluate(items, &self.query)
    }

    fn toggle_category(&mut self, name: String) {
        let mut selected = match std::mem::take(&mut self.query.category) {
            CategoryFilter::All => Vec::new(),
            CategoryFilter::Only(c) => vec![c],
            CategoryFilter::AnyOf(cs) => cs,
        };
        if let Some(i) = selected.iter().position(|c| *c == name) {
            selected.remove(i);
        } else {
            selected.push(name);
        }
        self.query.category =
            if selected.is_empty() { CategoryFilter::All } else { CategoryFilter::AnyOf(selected) };
    }
}
