use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::models::CatalogItem;

const CATALOG_KEY: &str = "catalog";

/// Errors that can occur while reading the catalog source
///
/// These never cross the store boundary: the public API is fail-soft and
/// degrades to an empty catalog so the recommendation surface always has
/// something to render.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Catalog store with a TTL-bounded in-memory cache
///
/// Loads the catalog JSON from disk and keeps the parsed result in a moka
/// cache, so repeated requests within the TTL window share one immutable
/// copy. Items are never mutated after load.
pub struct CatalogStore {
    path: PathBuf,
    cache: moka::future::Cache<&'static str, Arc<Vec<CatalogItem>>>,
}

impl CatalogStore {
    /// Create a new store reading from `path`, re-reading after `ttl_secs`.
    pub fn new(path: impl Into<PathBuf>, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            path: path.into(),
            cache,
        }
    }

    /// Load the catalog, reusing the cached copy when fresh
    ///
    /// Fail-soft: a missing or unparseable source yields an empty catalog,
    /// never an error. Empty results are not cached so a late-appearing
    /// source is picked up on the next request.
    pub async fn load(&self) -> Arc<Vec<CatalogItem>> {
        if let Some(items) = self.cache.get(CATALOG_KEY).await {
            tracing::trace!("Catalog cache hit ({} items)", items.len());
            return items;
        }

        let items = Arc::new(self.load_from_disk().await);

        if !items.is_empty() {
            self.cache.insert(CATALOG_KEY, items.clone()).await;
        }

        items
    }

    /// Drop the cached copy so the next load re-reads the source.
    pub async fn invalidate(&self) {
        self.cache.invalidate(&CATALOG_KEY).await;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_from_disk(&self) -> Vec<CatalogItem> {
        match self.try_load().await {
            Ok(items) => {
                tracing::debug!(
                    "Loaded {} catalog items from {}",
                    items.len(),
                    self.path.display()
                );
                items
            }
            Err(e) => {
                tracing::warn!(
                    "Catalog source unavailable at {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn try_load(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(parse_catalog(&raw)?)
    }
}

/// Parse a catalog document into items, skipping malformed entries
///
/// The document must be a JSON array. Each element is deserialized
/// independently; an element missing required fields (`title`, `category`)
/// is skipped with a warning and the rest of the load continues. A document
/// that is not valid JSON, or not an array, is an error for the caller to
/// absorb.
pub fn parse_catalog(raw: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Skipping malformed catalog entry {}: {}", index, e);
                None
            }
        })
        .collect())
}
