pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_loot_item_table;
mod m20260101_000002_create_wallet_table;
mod m20260101_000003_create_catch_table;
mod m20260101_000004_create_favorite_table;
mod m20260102_000005_seed_loot_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_loot_item_table::Migration),
            Box::new(m20260101_000002_create_wallet_table::Migration),
            Box::new(m20260101_000003_create_catch_table::Migration),
            Box::new(m20260101_000004_create_favorite_table::Migration),
            Box::new(m20260102_000005_seed_loot_catalog::Migration),
        ]
    }
}
