//! lectern-catalog
//!
//! In-memory collections behind each listing. Built-in data ships with the
//! crate; `Catalog::load_dir` swaps in JSON collections from a directory.
use lectern_core::config::Config;
use lectern_core::types::ItemId;
use lectern_core::{Article, Book, Domain, Episode, Error, NewsStory, Result};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod books;

const ARTICLES_JSON: &str = include_str!("../data/articles.json");
const NEWS_JSON: &str = include_str!("../data/news.json");
const EPISODES_JSON: &str = include_str!("../data/episodes.json");

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub articles: Vec<Article>,
    pub news: Vec<NewsStory>,
    pub episodes: Vec<Episode>,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        let catalog = Self {
            books: books::generate(books::SHELF_SIZE),
            articles: parse(Domain::Articles, ARTICLES_JSON, |a: &Article| a.id)?,
            news: parse(Domain::News, NEWS_JSON, |n: &NewsStory| n.id)?,
            episodes: parse(Domain::Episodes, EPISODES_JSON, |e: &Episode| e.id)?,
        };
        Ok(catalog)
    }

    /// Built-in data with any `<domain>.json` found directly in `dir`
    /// replacing that domain's collection.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::NotFound(format!("catalog directory {}", dir.display())));
        }
        let mut catalog = Self::builtin()?;
        for path in list_json_files(dir) {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let Ok(domain) = stem.parse::<Domain>() else {
                warn!(file = %path.display(), "skipping unrecognized catalog file");
                continue;
            };
            let raw = fs::read_to_string(&path)?;
            match domain {
                Domain::Books => catalog.books = parse(domain, &raw, |b: &Book| b.id)?,
                Domain::Articles => catalog.articles = parse(domain, &raw, |a: &Article| a.id)?,
                Domain::News => catalog.news = parse(domain, &raw, |n: &NewsStory| n.id)?,
                Domain::Episodes => catalog.episodes = parse(domain, &raw, |e: &Episode| e.id)?,
            }
            info!(%domain, file = %path.display(), items = catalog.len(domain), "loaded catalog file");
        }
        Ok(catalog)
    }

    /// Built-in data, overridden from `catalog.data_dir` when configured.
    pub fn load(config: &Config) -> Result<Self> {
        match config.data_dir()? {
            Some(dir) => Self::load_dir(&dir),
            None => Self::builtin(),
        }
    }

    pub fn len(&self, domain: Domain) -> usize {
        match domain {
            Domain::Books => self.books.len(),
            Domain::Articles => self.articles.len(),
            Domain::News => self.news.len(),
            Domain::Episodes => self.episodes.len(),
        }
    }
}

fn parse<T: DeserializeOwned>(domain: Domain, raw: &str, id: fn(&T) -> ItemId) -> Result<Vec<T>> {
    let items: Vec<T> = serde_json::from_str(raw)
        .map_err(|e| Error::Parse(format!("{domain} collection: {e}")))?;
    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(id(item)) {
            return Err(Error::Parse(format!("{domain} collection: duplicate id {}", id(item))));
        }
    }
    Ok(items)
}

fn list_json_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    files.sort();
    files
}
