//! Domain records shown in the browsing grids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub type ItemId = u32;

/// Which listing a collection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Books,
    Articles,
    News,
    Episodes,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Domain::Books, Domain::Articles, Domain::News, Domain::Episodes];

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Books => "books",
            Domain::Articles => "articles",
            Domain::News => "news",
            Domain::Episodes => "episodes",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::NotFound(format!("unknown domain '{s}'")))
    }
}

/// Numeric engagement fields a listing can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Views,
    Citations,
    Downloads,
    Rating,
    Likes,
    Dislikes,
    /// Running time in seconds.
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookFormat {
    Hardcover,
    Paperback,
    #[serde(rename = "E-Book")]
    EBook,
    Audiobook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
    Reserved,
}

/// A library book.
///
/// `tags` carries secondary genres shown as chips under the cover; the
/// single `category` is what the category filter compares against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: ItemId,
    pub title: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub publish_date: DateTime<Utc>,
    pub format: BookFormat,
    pub status: BookStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ItemId,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub publish_date: DateTime<Utc>,
    pub read_time: String,
    #[serde(default)]
    pub citations: Option<u64>,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub rating: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsStory {
    pub id: ItemId,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub publish_date: DateTime<Utc>,
    pub read_time: String,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub urgent: bool,
}

/// A video podcast episode. `duration` keeps the display form (`"45:32"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub author: String,
    pub category: String,
    pub publish_date: DateTime<Utc>,
    pub duration: String,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub dislikes: Option<u64>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub featured: bool,
}

impl Episode {
    pub fn duration_secs(&self) -> u32 {
        parse_duration_secs(&self.duration)
    }
}

/// Convert a display duration to seconds.
///
/// Accepts `"MM:SS"`, `"H:MM:SS"` and `"N min"`. Anything else is `0`.
pub fn parse_duration_secs(s: &str) -> u32 {
    let s = s.trim();
    if let Some(mins) = s.strip_suffix("min") {
        return mins.trim().parse::<u32>().map_or(0, |m| m.saturating_mul(60));
    }
    let mut total: u32 = 0;
    let mut parts = 0;
    for part in s.split(':') {
        let Ok(n) = part.trim().parse::<u32>() else { return 0 };
        total = total.saturating_mul(60).saturating_add(n);
        parts += 1;
    }
    if (2..=3).contains(&parts) { total } else { 0 }
}
