use std::fs;
use tempfile::TempDir;

use lectern_catalog::Catalog;
use lectern_core::config::ListingConfig;
use lectern_core::{Domain, Error};
use lectern_query::{split_featured, CategoryFilter, ListQueryEngine, Query, SortKey};

const ONE_STORY: &str = r#"[
  {
    "id": 7,
    "title": "Local Library Extends Hours",
    "excerpt": "Weekend openings start next month.",
    "author": "Ana Ruiz",
    "category": "Community",
    "publishDate": "2024-02-01T09:30:00Z",
    "readTime": "2 min read"
  }
]"#;

#[test]
fn json_file_replaces_only_its_collection() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("news.json"), ONE_STORY).unwrap();
    fs::write(tmp.path().join("podcasts.json"), "[]").unwrap();
    fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

    let catalog = Catalog::load_dir(tmp.path()).expect("load");
    assert_eq!(catalog.len(Domain::News), 1);
    assert_eq!(catalog.news[0].id, 7);
    assert!(!catalog.news[0].featured);
    assert_eq!(catalog.news[0].views, None);
    assert_eq!(catalog.len(Domain::Articles), 6, "other domains keep built-in data");
}

#[test]
fn malformed_json_is_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("episodes.json"), "[{\"id\": 1,").unwrap();
    match Catalog::load_dir(tmp.path()) {
        Err(Error::Parse(msg)) => assert!(msg.contains("episodes"), "{msg}"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let story = ONE_STORY.trim().trim_start_matches('[').trim_end_matches(']');
    let two = format!("[{story},{story}]");
    fs::write(tmp.path().join("news.json"), two).unwrap();
    match Catalog::load_dir(tmp.path()) {
        Err(Error::Parse(msg)) => assert!(msg.contains("duplicate id 7"), "{msg}"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn missing_directory_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nowhere");
    assert!(matches!(Catalog::load_dir(&missing), Err(Error::NotFound(_))));
}

#[test]
fn builtin_articles_filter_by_category_and_rank_by_citations() {
    let catalog = Catalog::builtin().unwrap();
    let engine = ListQueryEngine::for_domain(Domain::Articles, &ListingConfig::default());
    let query = Query::new().category(CategoryFilter::Only("Technology".into())).sort(SortKey::MostCited);
    let page = engine.evaluate(&catalog.articles, &query);
    assert_eq!(page.total, 2);
    assert_eq!(page.results.iter().map(|a| a.citations).collect::<Vec<_>>(), vec![Some(89), Some(45)]);
}

#[test]
fn builtin_episodes_longest_first() {
    let catalog = Catalog::builtin().unwrap();
    let engine = ListQueryEngine::for_domain(Domain::Episodes, &ListingConfig::default());
    let page = engine.evaluate(&catalog.episodes, &Query::new().sort(SortKey::Longest));
    let durations: Vec<&str> = page.results.iter().map(|e| e.duration.as_str()).collect();
    assert_eq!(durations[0], "56:42");
    let pos = |d: &str| durations.iter().position(|x| *x == d).unwrap();
    assert!(pos("45:32") < pos("38:15"));
}

#[test]
fn builtin_news_has_urgent_lead_story() {
    let catalog = Catalog::builtin().unwrap();
    let engine = ListQueryEngine::for_domain(Domain::News, &ListingConfig::default());
    let page = engine.evaluate(&catalog.news, &Query::new());
    assert_eq!(page.total, 6);
    let split = split_featured(&page.results);
    assert_eq!(split.urgent().map(|s| s.id), Some(1));
    assert_eq!(split.regular.len(), 5);
}

#[test]
fn builtin_shelf_pages_by_twelve() {
    let catalog = Catalog::builtin().unwrap();
    let engine = ListQueryEngine::for_domain(Domain::Books, &ListingConfig::default());
    let page = engine.evaluate(&catalog.books, &Query::new().page(9));
    assert_eq!(page.total, 100);
    assert_eq!(page.results.len(), 4);
    assert!(!page.has_next());
    assert_eq!(page.total_pages(), 9);

    let gatsby = engine.evaluate(&catalog.books, &Query::new().search("GATSBY"));
    assert!(gatsby.total > 0);
    assert!(gatsby.results.iter().all(|b| b.title == "The Great Gatsby"));
}
