use crate::{
    data::loot_item::LootItemRepository,
    error::AppError,
    model::loot::{CatalogSource, Tier},
};
use test_utils::{builder::TestBuilder, factory::loot_item::LootItemFactory};

mod get_by_source;
