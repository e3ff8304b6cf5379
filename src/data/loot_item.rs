//! Loot item data repository for catalog reads.
//!
//! The catalog is seeded by migrations and never written at runtime, so this repository only
//! exposes queries. Rows are converted to [`LootItem`] here; a row with an unknown tier or
//! source is an internal error rather than something callers need to handle.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    error::AppError,
    model::loot::{CatalogSource, LootItem},
};

/// Repository providing read access to the loot catalog.
pub struct LootItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LootItemRepository<'a, C> {
    /// Creates a new LootItemRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `LootItemRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every catalog item of one pool, ordered by ID.
    ///
    /// # Arguments
    /// - `source` - Pool to load
    ///
    /// # Returns
    /// - `Ok(Vec<LootItem>)` - Items of the pool, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored row has an unknown tier
    pub async fn get_by_source(&self, source: CatalogSource) -> Result<Vec<LootItem>, AppError> {
        let entities = entity::prelude::LootItem::find()
            .filter(entity::loot_item::Column::Source.eq(source.as_str()))
            .order_by_asc(entity::loot_item::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(LootItem::from_entity).collect()
    }
}
