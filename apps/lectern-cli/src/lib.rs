//! Terminal front end for the listing views.
pub mod format;
pub mod render;

pub use render::{render_facets, render_page, Entry};
