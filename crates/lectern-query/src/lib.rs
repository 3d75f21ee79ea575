//! lectern-query
//!
//! The listing pipeline shared by the books, articles, news and episodes
//! views: `Query` in, `Page` out. See `engine` for filter/sort/paginate,
//! `featured` for the lead-item split and `session` for the query lifecycle.
#![deny(warnings)]
#![deny(unused_imports)]

pub mod engine;
pub mod facets;
pub mod featured;
pub mod query;
pub mod session;

pub use engine::{ListQueryEngine, Page};
pub use facets::{category_counts, category_options};
pub use featured::{split_featured, FeaturedSplit};
pub use query::{CategoryFilter, Query, SortKey, ALL_CATEGORIES};
pub use session::{ListingEvent, ListingSession};
