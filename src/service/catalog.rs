//! Catalog snapshots served from the LRU cache.
//!
//! The catalog only changes through migrations, so each pool is loaded once and kept in the
//! cache until invalidated. Snapshots share the cached vectors through `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::{
    data::loot_item::LootItemRepository,
    error::{economy::EconomyError, AppError},
    model::loot::{CatalogSnapshot, CatalogSource, LootItem},
    service::cache::LruCache,
};

/// Cache of catalog pools keyed by source.
pub type CatalogCache = LruCache<CatalogSource, Arc<Vec<LootItem>>>;

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a CatalogCache,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a CatalogCache) -> Self {
        Self { db, cache }
    }

    /// Gets both catalog pools, loading any pool missing from the cache.
    ///
    /// # Returns
    /// - `Ok(CatalogSnapshot)` - Tiered and bonus pools
    /// - `Err(AppError)` - Database error or invalid catalog row
    pub async fn snapshot(&self) -> Result<CatalogSnapshot, AppError> {
        Ok(CatalogSnapshot {
            tiered: self.pool(CatalogSource::Tiered).await?,
            bonus: self.pool(CatalogSource::Bonus).await?,
        })
    }

    /// Resolves a user-supplied item name or ID against the catalog.
    ///
    /// # Returns
    /// - `Ok(LootItem)` - Matching item
    /// - `Err(AppError::EconomyErr(NotFound))` - No item matches `query`
    pub async fn resolve(&self, query: &str) -> Result<LootItem, AppError> {
        let snapshot = self.snapshot().await?;

        snapshot.find(query).cloned().ok_or_else(|| {
            EconomyError::NotFound(format!("No catalog item matches `{}`.", query.trim())).into()
        })
    }

    /// Drops every cached pool so the next snapshot reloads from the database.
    pub async fn invalidate(&self) {
        for source in CatalogSource::ALL {
            if self.cache.invalidate(&source).await {
                debug!("Invalidated {} catalog pool", source.as_str());
            }
        }
    }

    async fn pool(&self, source: CatalogSource) -> Result<Arc<Vec<LootItem>>, AppError> {
        if let Some(items) = self.cache.get(&source).await {
            return Ok(items);
        }

        let items = Arc::new(
            LootItemRepository::new(self.db)
                .get_by_source(source)
                .await?,
        );
        debug!("Loaded {} {} catalog items", items.len(), source.as_str());

        self.cache.put(source, items.clone()).await;

        Ok(items)
    }
}
