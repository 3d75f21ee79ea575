#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use lectern_core::types::{BookFormat, BookStatus};
use lectern_core::{Article, Book, Episode, NewsStory};

pub fn date(ymd: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(ymd, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

pub fn book(id: u32, title: &str, author: &str, category: &str, published: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        tags: Vec::new(),
        publish_date: date(published),
        format: BookFormat::Paperback,
        status: BookStatus::Available,
    }
}

/// Fifteen books, one per day of January 2020, in collection order by id.
pub fn fifteen_books() -> Vec<Book> {
    (1..=15)
        .map(|i| book(i, &format!("Book {i}"), "Author", "Fiction", &format!("2020-01-{i:02}")))
        .collect()
}

pub fn article(
    id: u32,
    title: &str,
    author: &str,
    category: &str,
    tags: &[&str],
    published: &str,
    citations: Option<u64>,
    rating: Option<f32>,
) -> Article {
    Article {
        id,
        title: title.to_string(),
        excerpt: String::new(),
        author: author.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        publish_date: date(published),
        read_time: "5 min read".to_string(),
        citations,
        downloads: citations.map(|c| c * 10),
        rating,
    }
}

pub fn news(id: u32, title: &str, excerpt: &str, published: &str, featured: bool, urgent: bool) -> NewsStory {
    NewsStory {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        author: "Desk".to_string(),
        category: "Business".to_string(),
        publish_date: date(published),
        read_time: "3 min read".to_string(),
        views: Some(u64::from(id) * 1000),
        featured,
        urgent,
    }
}

pub fn episode(id: u32, title: &str, duration: &str, published: &str, featured: bool) -> Episode {
    Episode {
        id,
        title: title.to_string(),
        description: format!("About {title}"),
        author: "Host".to_string(),
        category: "Literature".to_string(),
        publish_date: date(published),
        duration: duration.to_string(),
        views: Some(1000),
        likes: None,
        dislikes: None,
        rating: Some(4.5),
        featured,
    }
}
