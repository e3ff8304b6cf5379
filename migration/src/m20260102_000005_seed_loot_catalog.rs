use sea_orm_migration::prelude::*;

use super::m20260101_000001_create_loot_item_table::LootItem;

/// Starting catalog: `(id, name, tier, source)`.
///
/// Tiered ids stay below 100 and bonus ids start at 101 so a sorted catch list shows the
/// regular fish before the oddities.
const CATALOG: &[(i32, &str, i32, &str)] = &[
    (1, "Minnow", 1, "tiered"),
    (2, "Perch", 1, "tiered"),
    (3, "Bluegill", 1, "tiered"),
    (4, "Sardine", 1, "tiered"),
    (5, "Trout", 2, "tiered"),
    (6, "Bass", 2, "tiered"),
    (7, "Carp", 2, "tiered"),
    (8, "Salmon", 3, "tiered"),
    (9, "Pike", 3, "tiered"),
    (10, "Catfish", 3, "tiered"),
    (11, "Swordfish", 4, "tiered"),
    (12, "Sturgeon", 4, "tiered"),
    (13, "Coelacanth", 5, "tiered"),
    (14, "Golden Koi", 5, "tiered"),
    (101, "Old Boot", 1, "bonus"),
    (102, "Tin Can", 1, "bonus"),
    (103, "Message in a Bottle", 2, "bonus"),
    (104, "Pearl", 3, "bonus"),
    (105, "Treasure Chest", 4, "bonus"),
    (106, "Kraken Tooth", 5, "bonus"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(LootItem::Table)
            .columns([
                LootItem::Id,
                LootItem::Name,
                LootItem::Tier,
                LootItem::Source,
            ])
            .to_owned();

        for (id, name, tier, source) in CATALOG {
            insert.values_panic([
                (*id).into(),
                (*name).into(),
                (*tier).into(),
                (*source).into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids: Vec<i32> = CATALOG.iter().map(|(id, ..)| *id).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(LootItem::Table)
                    .and_where(Expr::col(LootItem::Id).is_in(ids))
                    .to_owned(),
            )
            .await
    }
}
