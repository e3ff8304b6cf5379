//! Loot item factory for creating test catalog rows.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating catalog items with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let item = LootItemFactory::new(&db)
///     .name("Old Boot")
///     .tier(1)
///     .source("bonus")
///     .build()
///     .await?;
/// ```
pub struct LootItemFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::loot_item::Model,
}

impl<'a> LootItemFactory<'a> {
    /// Creates a new LootItemFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented, starting above the seeded catalog range
    /// - name: `"Item {id}"`
    /// - tier: `1`
    /// - source: `"tiered"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = 10_000 + next_id() as i32;
        let entity = fixture::loot_item::entity_builder()
            .id(id)
            .name(format!("Item {}", id))
            .build();

        Self { db, entity }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the rarity tier, 1 through 5.
    pub fn tier(mut self, tier: i32) -> Self {
        self.entity.tier = tier;
        self
    }

    /// Sets the pool, `"tiered"` or `"bonus"`.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.entity.source = source.into();
        self
    }

    /// Builds and inserts the loot item into the database.
    ///
    /// # Returns
    /// - `Ok(entity::loot_item::Model)` - Created catalog row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::loot_item::Model, DbErr> {
        entity::loot_item::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            tier: ActiveValue::Set(self.entity.tier),
            source: ActiveValue::Set(self.entity.source),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tier 1 tiered catalog item with default values.
pub async fn create_loot_item(db: &DatabaseConnection) -> Result<entity::loot_item::Model, DbErr> {
    LootItemFactory::new(db).build().await
}
