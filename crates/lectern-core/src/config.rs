//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Provides helpers to expand `~` and `${VAR}` and to resolve relative paths
//! against a known base directory.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Grid sizes for the paginated listings. News and episodes render every
/// match and take no page size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    pub page_size: usize,
    #[serde(default)]
    pub books_page_size: Option<usize>,
    #[serde(default)]
    pub articles_page_size: Option<usize>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE, books_page_size: None, articles_page_size: None }
    }
}

impl ListingConfig {
    pub fn books(&self) -> usize { self.books_page_size.unwrap_or(self.page_size) }
    pub fn articles(&self) -> usize { self.articles_page_size.unwrap_or(self.page_size) }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding `books.json` etc. Unset means built-in data only.
    #[serde(default)]
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Defaults {
    listing: ListingConfig,
    catalog: CatalogConfig,
}

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    /// Load `config.toml` and the `RUST_ENV` overlay from `dir`.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Defaults::default()))
            .merge(Toml::file(dir.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment, base_dir: dir.to_path_buf() };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{key}': {e}")))
    }

    pub fn listing(&self) -> Result<ListingConfig> {
        self.get("listing")
    }

    /// Catalog override directory, expanded and resolved against the
    /// directory the config was loaded from.
    pub fn data_dir(&self) -> Result<Option<PathBuf>> {
        let catalog: CatalogConfig = self.get("catalog")?;
        Ok(catalog.data_dir.map(|d| resolve_with_base(&self.base_dir, d)))
    }

    fn validate(&self) -> Result<()> {
        let listing = self.listing()?;
        for (key, size) in [
            ("listing.page_size", listing.page_size),
            ("listing.books_page_size", listing.books()),
            ("listing.articles_page_size", listing.articles()),
        ] {
            if size == 0 {
                return Err(Error::InvalidConfig(format!("{key} must be at least 1")));
            }
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
