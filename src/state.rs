//! Shared state handed to every interaction handler.
//!
//! All fields are cheap to clone: the database connection is a pool handle and the cache and
//! lock map share their storage through `Arc`.

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    service::{catalog::CatalogCache, settlement::UserLocks},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Catalog pools keyed by source; read by the catalog service only.
    pub catalog_cache: CatalogCache,

    /// Per-user locks held while a ledger change is planned and applied.
    pub user_locks: UserLocks,

    /// Balance of a freshly created wallet.
    pub starting_balance: f64,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Connected database with migrations applied
    /// - `config` - Application configuration for economy settings
    ///
    /// # Returns
    /// - `AppState` - State ready to be shared with the bot handler
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            catalog_cache: CatalogCache::new(config.catalog_cache_capacity),
            user_locks: UserLocks::new(),
            starting_balance: config.starting_balance,
        }
    }
}
