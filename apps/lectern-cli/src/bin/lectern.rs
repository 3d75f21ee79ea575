use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use lectern_catalog::Catalog;
use lectern_cli::{render_facets, render_page, Entry};
use lectern_core::config::Config;
use lectern_core::Domain;
use lectern_query::{category_counts, category_options, CategoryFilter, ListQueryEngine, Query, SortKey};
use tracing_subscriber::EnvFilter;

/// Browse the reading catalog: search, filter by category, sort and page.
#[derive(Debug, Parser)]
#[command(name = "lectern", version)]
struct Cli {
    /// Directory holding config.toml and its RUST_ENV overlays
    #[arg(long, env = "LECTERN_CONFIG_DIR", default_value = ".")]
    config_dir: PathBuf,

    /// books, articles, news or episodes
    domain: Domain,

    /// Case-insensitive substring of title, author, tags or excerpt
    #[arg(long, default_value = "")]
    search: String,

    /// Exact category; repeat to select several, "all" for no filter.
    /// On books every genre of a title counts, like the library's chips
    #[arg(long = "category")]
    categories: Vec<String>,

    #[arg(long, default_value_t = SortKey::Newest)]
    sort: SortKey,

    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Print category options with match counts
    #[arg(long)]
    facets: bool,

    /// Print the page as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if !SortKey::for_domain(cli.domain).contains(&cli.sort) {
        let offered: Vec<&str> = SortKey::for_domain(cli.domain).iter().map(|k| k.as_str()).collect();
        bail!("{} cannot be sorted by {}; choose one of {}", cli.domain, cli.sort, offered.join(", "));
    }

    let config = Config::load_from(&cli.config_dir)
        .with_context(|| format!("loading config from {}", cli.config_dir.display()))?;
    let catalog = Catalog::load(&config).context("loading catalog")?;
    let engine = ListQueryEngine::for_domain(cli.domain, &config.listing()?);
    let category = match (cli.domain, CategoryFilter::from_values(cli.categories.clone())) {
        (Domain::Books, CategoryFilter::Only(genre)) => CategoryFilter::AnyOf(vec![genre]),
        (_, category) => category,
    };
    let query = Query::new()
        .search(cli.search.clone())
        .category(category)
        .sort(cli.sort)
        .page(cli.page);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.domain {
        Domain::Books => show(&mut out, &catalog.books, engine, &query, &cli)?,
        Domain::Articles => show(&mut out, &catalog.articles, engine, &query, &cli)?,
        Domain::News => show(&mut out, &catalog.news, engine, &query, &cli)?,
        Domain::Episodes => show(&mut out, &catalog.episodes, engine, &query, &cli)?,
    }
    out.flush()?;
    Ok(())
}

fn show<T, W>(out: &mut W, items: &[T], engine: ListQueryEngine, query: &Query, cli: &Cli) -> anyhow::Result<()>
where
    T: Entry + serde::Serialize,
    W: Write,
{
    let page = engine.evaluate(items, query);
    tracing::info!(domain = %cli.domain, total = page.total, shown = page.results.len(), "rendering listing");
    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &page)?;
        writeln!(out)?;
        return Ok(());
    }
    if cli.facets {
        render_facets(out, &category_options(items), &category_counts(items, query))?;
    }
    render_page(out, &page, chrono::Utc::now())?;
    Ok(())
}
