use chrono::{DateTime, Utc};

use crate::types::{Article, Book, Domain, Episode, Metric, NewsStory};

/// A record that can appear in a browsing grid.
///
/// The query engine only sees records through this trait. `search_fields`
/// yields the domain-specific text matched alongside title and author.
pub trait Listing: Send + Sync {
    const DOMAIN: Domain;

    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn category(&self) -> &str;
    fn search_fields(&self) -> Box<dyn Iterator<Item = &str> + '_>;
    fn publish_date(&self) -> DateTime<Utc>;
    fn metric(&self, metric: Metric) -> Option<f64>;

    /// Every category a multi-select chip can match. Starts with `category()`.
    fn categories(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(std::iter::once(self.category()))
    }

    fn is_featured(&self) -> bool {
        false
    }

    fn is_urgent(&self) -> bool {
        false
    }
}

impl Listing for Book {
    const DOMAIN: Domain = Domain::Books;

    fn title(&self) -> &str { &self.title }
    fn author(&self) -> &str { &self.author }
    fn category(&self) -> &str { &self.category }
    fn search_fields(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.tags.iter().map(String::as_str))
    }
    fn publish_date(&self) -> DateTime<Utc> { self.publish_date }
    fn metric(&self, _metric: Metric) -> Option<f64> { None }
    // Secondary genres live in `tags`.
    fn categories(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(std::iter::once(self.category.as_str()).chain(self.tags.iter().map(String::as_str)))
    }
}

impl Listing for Article {
    const DOMAIN: Domain = Domain::Articles;

    fn title(&self) -> &str { &self.title }
    fn author(&self) -> &str { &self.author }
    fn category(&self) -> &str { &self.category }
    fn search_fields(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.tags.iter().map(String::as_str))
    }
    fn publish_date(&self) -> DateTime<Utc> { self.publish_date }
    #[allow(clippy::cast_precision_loss)]
    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Citations => self.citations.map(|v| v as f64),
            Metric::Downloads => self.downloads.map(|v| v as f64),
            Metric::Rating => self.rating.map(f64::from),
            _ => None,
        }
    }
}

impl Listing for NewsStory {
    const DOMAIN: Domain = Domain::News;

    fn title(&self) -> &str { &self.title }
    fn author(&self) -> &str { &self.author }
    fn category(&self) -> &str { &self.category }
    fn search_fields(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(std::iter::once(self.excerpt.as_str()))
    }
    fn publish_date(&self) -> DateTime<Utc> { self.publish_date }
    #[allow(clippy::cast_precision_loss)]
    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Views => self.views.map(|v| v as f64),
            _ => None,
        }
    }
    fn is_featured(&self) -> bool { self.featured }
    fn is_urgent(&self) -> bool { self.urgent }
}

impl Listing for Episode {
    const DOMAIN: Domain = Domain::Episodes;

    fn title(&self) -> &str { &self.title }
    fn author(&self) -> &str { &self.author }
    fn category(&self) -> &str { &self.category }
    fn search_fields(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(std::iter::once(self.description.as_str()))
    }
    fn publish_date(&self) -> DateTime<Utc> { self.publish_date }
    #[allow(clippy::cast_precision_loss)]
    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Views => self.views.map(|v| v as f64),
            Metric::Likes => self.likes.map(|v| v as f64),
            Metric::Dislikes => self.dislikes.map(|v| v as f64),
            Metric::Rating => self.rating.map(f64::from),
            Metric::Duration => Some(f64::from(self.duration_secs())),
            _ => None,
        }
    }
    fn is_featured(&self) -> bool { self.featured }
}
