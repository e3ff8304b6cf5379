//! Loot item fixtures for creating in-memory catalog rows.

use entity::loot_item;

/// Default test item ID.
pub const DEFAULT_ID: i32 = 1;

/// Default test item name.
pub const DEFAULT_NAME: &str = "Minnow";

/// Default rarity tier.
pub const DEFAULT_TIER: i32 = 1;

/// Default pool.
pub const DEFAULT_SOURCE: &str = "tiered";

/// Creates a loot item entity model with default values.
pub fn entity() -> loot_item::Model {
    entity_builder().build()
}

/// Creates a loot item entity builder for customization.
pub fn entity_builder() -> LootItemEntityBuilder {
    LootItemEntityBuilder::default()
}

/// Builder for creating customized loot item entity models.
pub struct LootItemEntityBuilder {
    entity: loot_item::Model,
}

impl Default for LootItemEntityBuilder {
    fn default() -> Self {
        Self {
            entity: loot_item::Model {
                id: DEFAULT_ID,
                name: DEFAULT_NAME.to_string(),
                tier: DEFAULT_TIER,
                source: DEFAULT_SOURCE.to_string(),
            },
        }
    }
}

impl LootItemEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn tier(mut self, tier: i32) -> Self {
        self.entity.tier = tier;
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.entity.source = source.into();
        self
    }

    pub fn build(self) -> loot_item::Model {
        self.entity
    }
}
