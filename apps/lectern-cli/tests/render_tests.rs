use chrono::{DateTime, NaiveDate, Utc};
use lectern_catalog::Catalog;
use lectern_cli::format::{calendar_date, compact_count, long_date, relative_age};
use lectern_cli::{render_facets, render_page};
use lectern_query::{category_counts, category_options, ListQueryEngine, Query};
use rstest::rstest;

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap().and_utc()
}

#[rstest]
#[case(999, "999")]
#[case(15_420, "15.4K")]
#[case(125_000, "125.0K")]
#[case(1_260_000, "1.3M")]
fn counts_render_compactly(#[case] n: u64, #[case] expected: &str) {
    assert_eq!(compact_count(n), expected);
}

#[rstest]
#[case(1, "1 day ago")]
#[case(3, "3 days ago")]
#[case(8, "2 weeks ago")]
#[case(45, "2 months ago")]
fn ages_bucket_by_days(#[case] days_back: i64, #[case] expected: &str) {
    let now = day(2024, 3, 1);
    assert_eq!(relative_age(now - chrono::Duration::days(days_back), now), expected);
}

#[test]
fn dates_render_long_form() {
    assert_eq!(long_date(day(2024, 1, 20)), "Saturday, January 20, 2024");
    assert_eq!(calendar_date(day(2024, 1, 2)), "January 2, 2024");
}

#[test]
fn news_page_leads_with_urgent_banner() {
    let catalog = Catalog::builtin().unwrap();
    let page = ListQueryEngine::unbounded().evaluate(&catalog.news, &Query::new());
    let mut out = Vec::new();
    render_page(&mut out, &page, day(2024, 2, 1)).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "6 stories found");
    assert!(lines[1].starts_with("BREAKING: Major Publishing Houses"), "{}", lines[1]);
    assert!(lines[2].starts_with("Featured: Major Publishing Houses"), "{}", lines[2]);
    assert!(lines[2].contains("15.4K views"));
    assert!(lines[3].starts_with("  1. Independent Bookstores"), "{}", lines[3]);
    assert!(!text.contains("Page 1 of"), "news is not paginated");
}

#[test]
fn book_page_shows_pagination_hints() {
    let catalog = Catalog::builtin().unwrap();
    let engine = ListQueryEngine::paged(12);
    let mut out = Vec::new();
    render_page(&mut out, &engine.evaluate(&catalog.books, &Query::new().page(2)), Utc::now()).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("100 books found\n"));
    assert!(text.contains(" 13. "), "numbering continues from page 1");
    assert!(text.contains("Page 2 of 9 · prev: --page 1 · next: --page 3"));
}

#[test]
fn page_zero_points_to_the_first_page() {
    let catalog = Catalog::builtin().unwrap();
    let page = ListQueryEngine::paged(12).evaluate(&catalog.books, &Query::new().page(0));
    let mut out = Vec::new();
    render_page(&mut out, &page, Utc::now()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "100 books found\nPages are numbered from 1; try --page 1.\n");
}

#[test]
fn empty_search_says_so() {
    let catalog = Catalog::builtin().unwrap();
    let page = ListQueryEngine::paged(12).evaluate(&catalog.articles, &Query::new().search("zzz-nonexistent"));
    let mut out = Vec::new();
    render_page(&mut out, &page, Utc::now()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0 articles found\nNo articles match your search.\n");
}

#[test]
fn facets_list_all_then_categories() {
    let catalog = Catalog::builtin().unwrap();
    let query = Query::new();
    let mut out = Vec::new();
    render_facets(&mut out, &category_options(&catalog.articles), &category_counts(&catalog.articles, &query)).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Categories:");
    assert_eq!(lines[1], "  all (6)");
    assert_eq!(lines[2], "  Technology (2)");
}
