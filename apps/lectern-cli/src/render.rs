//! Plain-text rendering of a listing page.
use chrono::{DateTime, Utc};
use lectern_core::{Article, Book, Episode, Listing, NewsStory};
use lectern_query::{split_featured, Page};
use std::io::{self, Write};

use crate::format::{calendar_date, compact_count, long_date, relative_age};

/// One grid card reduced to a line of text.
pub trait Entry: Listing {
    fn noun() -> &'static str;
    fn line(&self, now: DateTime<Utc>) -> String;
}

impl Entry for Book {
    fn noun() -> &'static str { "books" }

    fn line(&self, _now: DateTime<Utc>) -> String {
        let mut chips = vec![self.category.as_str()];
        chips.extend(self.tags.iter().map(String::as_str));
        format!(
            "{} by {} [{}] {:?}, {:?}, {}",
            self.title,
            self.author,
            chips.join(", "),
            self.format,
            self.status,
            self.publish_date.format("%Y")
        )
    }
}

impl Entry for Article {
    fn noun() -> &'static str { "articles" }

    fn line(&self, _now: DateTime<Utc>) -> String {
        let mut line = format!(
            "{} by {} ({}) {} · {}",
            self.title,
            self.author,
            self.category,
            calendar_date(self.publish_date),
            self.read_time
        );
        if let Some(rating) = self.rating {
            line.push_str(&format!(" · ★ {rating:.1}"));
        }
        if let Some(citations) = self.citations {
            line.push_str(&format!(" · {citations} citations"));
        }
        if let Some(downloads) = self.downloads {
            line.push_str(&format!(" · {} downloads", compact_count(downloads)));
        }
        if !self.tags.is_empty() {
            let shown: Vec<&str> = self.tags.iter().take(3).map(String::as_str).collect();
            line.push_str(&format!(" #{}", shown.join(" #")));
        }
        line
    }
}

impl Entry for NewsStory {
    fn noun() -> &'static str { "stories" }

    fn line(&self, _now: DateTime<Utc>) -> String {
        let views = self.views.map(compact_count).unwrap_or_else(|| "0".to_string());
        format!(
            "{} · By {} · {} · {} · {} views",
            self.title,
            self.author,
            long_date(self.publish_date),
            self.read_time,
            views
        )
    }
}

impl Entry for Episode {
    fn noun() -> &'static str { "episodes" }

    fn line(&self, now: DateTime<Utc>) -> String {
        let views = self.views.map(compact_count).unwrap_or_else(|| "0".to_string());
        let rating = self.rating.map(|r| format!(" · ★ {r:.1}")).unwrap_or_default();
        format!(
            "{} [{}] {} · {} views · {}{}",
            self.title,
            self.duration,
            self.author,
            views,
            relative_age(self.publish_date, now),
            rating
        )
    }
}

/// Write the page the way the listing view lays it out: urgent banner,
/// featured item, the numbered grid, then pagination hints.
pub fn render_page<T: Entry, W: Write>(out: &mut W, page: &Page<'_, T>, now: DateTime<Utc>) -> io::Result<()> {
    writeln!(out, "{} {} found", page.total, T::noun())?;

    let split = split_featured(&page.results);
    if let Some(urgent) = split.urgent() {
        writeln!(out, "BREAKING: {}", urgent.title())?;
    }
    if let Some(featured) = split.featured {
        writeln!(out, "Featured: {}", featured.line(now))?;
    }

    let offset = page.page_size.map_or(0, |size| page.page.saturating_sub(1) * size);
    for (i, item) in split.regular.iter().enumerate() {
        writeln!(out, "{:>3}. {}", offset + i + 1, item.line(now))?;
    }

    if page.total == 0 {
        writeln!(out, "No {} match your search.", T::noun())?;
    } else if page.page == 0 {
        writeln!(out, "Pages are numbered from 1; try --page 1.")?;
        return Ok(());
    } else if page.is_empty() {
        writeln!(out, "Page {} is past the last page ({}).", page.page, page.total_pages())?;
    }

    if page.page_size.is_some() && page.total > 0 {
        let mut hint = format!("Page {} of {}", page.page, page.total_pages());
        if page.has_previous() {
            hint.push_str(&format!(" · prev: --page {}", page.page - 1));
        }
        if page.has_next() {
            hint.push_str(&format!(" · next: --page {}", page.page + 1));
        }
        writeln!(out, "{hint}")?;
    }
    Ok(())
}

/// Category-select contents with match counts for the current search.
pub fn render_facets<W: Write>(out: &mut W, options: &[String], counts: &[(String, usize)]) -> io::Result<()> {
    writeln!(out, "Categories:")?;
    for option in options {
        let n = counts.iter().find(|(c, _)| c == option).map_or(0, |(_, n)| *n);
        writeln!(out, "  {option} ({n})")?;
    }
    Ok(())
}
