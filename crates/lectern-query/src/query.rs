//! Query value driving a listing view.

use lectern_core::{Domain, Error, Listing, Metric};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    MostCited,
    MostDownloaded,
    MostViewed,
    TopRated,
    HighestRated,
    Longest,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::MostCited,
        SortKey::MostDownloaded,
        SortKey::MostViewed,
        SortKey::TopRated,
        SortKey::HighestRated,
        SortKey::Longest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::MostCited => "mostCited",
            SortKey::MostDownloaded => "mostDownloaded",
            SortKey::MostViewed => "mostViewed",
            SortKey::TopRated => "topRated",
            SortKey::HighestRated => "highestRated",
            SortKey::Longest => "longest",
        }
    }

    /// The numeric field ranked descending, or `None` for the date orders.
    pub fn metric(self) -> Option<Metric> {
        match self {
            SortKey::Newest | SortKey::Oldest => None,
            SortKey::MostCited => Some(Metric::Citations),
            SortKey::MostDownloaded => Some(Metric::Downloads),
            SortKey::MostViewed => Some(Metric::Views),
            SortKey::TopRated | SortKey::HighestRated => Some(Metric::Rating),
            SortKey::Longest => Some(Metric::Duration),
        }
    }

    /// Sort options offered by each listing's sort control.
    pub fn for_domain(domain: Domain) -> &'static [SortKey] {
        match domain {
            Domain::Books => &[SortKey::Newest, SortKey::Oldest],
            Domain::Articles => &[
                SortKey::Newest,
                SortKey::Oldest,
                SortKey::MostCited,
                SortKey::MostDownloaded,
                SortKey::HighestRated,
            ],
            Domain::News => &[SortKey::Newest, SortKey::Oldest, SortKey::MostViewed],
            Domain::Episodes => &[
                SortKey::Newest,
                SortKey::Oldest,
                SortKey::MostViewed,
                SortKey::TopRated,
                SortKey::Longest,
            ],
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::Parse(format!("unknown sort key '{s}'")))
    }
}

/// The category axis of a query.
///
/// `Only` compares the single primary category exactly. `AnyOf` backs the
/// library's multi-select chips and checks every entry of
/// [`Listing::categories`]; an empty selection matches everything, like `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
    AnyOf(Vec<String>),
}

impl CategoryFilter {
    pub fn matches<T: Listing>(&self, item: &T) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == item.category(),
            CategoryFilter::AnyOf(cs) => cs.is_empty() || item.categories().any(|own| cs.iter().any(|c| c == own)),
        }
    }

    /// Build from repeated `--category` style values. `"all"` anywhere wins.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.iter().any(|v| v == ALL_CATEGORIES) {
            return CategoryFilter::All;
        }
        match values.len() {
            0 => CategoryFilter::All,
            1 => CategoryFilter::Only(values.remove(0)),
            _ => CategoryFilter::AnyOf(values),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Only(c) => f.write_str(c),
            CategoryFilter::AnyOf(cs) if cs.is_empty() => f.write_str(ALL_CATEGORIES),
            CategoryFilter::AnyOf(cs) => f.write_str(&cs.join(", ")),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::Parse("empty category".to_string()));
        }
        Ok(if s == ALL_CATEGORIES { CategoryFilter::All } else { CategoryFilter::Only(s.to_string()) })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CategoryRepr {
    One(String),
    Many(Vec<String>),
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self {
            CategoryFilter::All => CategoryRepr::One(ALL_CATEGORIES.to_string()),
            CategoryFilter::Only(c) => CategoryRepr::One(c.clone()),
            CategoryFilter::AnyOf(cs) => CategoryRepr::Many(cs.clone()),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match CategoryRepr::deserialize(deserializer)? {
            CategoryRepr::One(c) if c == ALL_CATEGORIES => CategoryFilter::All,
            CategoryRepr::One(c) => CategoryFilter::Only(c),
            CategoryRepr::Many(cs) => CategoryFilter::AnyOf(cs),
        })
    }
}

/// Search term, category, sort order and page for one listing view.
///
/// `search_term` is matched as typed; it is not trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Query {
    pub search_term: String,
    pub category: CategoryFilter,
    #[serde(rename = "sortBy")]
    pub sort: SortKey,
    pub page: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self { search_term: String::new(), category: CategoryFilter::All, sort: SortKey::Newest, page: 1 }
    }
}

impl Query {
    pub fn new() -> Self { Self::default() }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}
