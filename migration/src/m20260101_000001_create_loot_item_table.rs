use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LootItem::Table)
                    .if_not_exists()
                    .col(integer(LootItem::Id).primary_key())
                    .col(string(LootItem::Name))
                    .col(integer(LootItem::Tier))
                    .col(string(LootItem::Source))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_loot_item_source_tier")
                    .table(LootItem::Table)
                    .col(LootItem::Source)
                    .col(LootItem::Tier)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LootItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LootItem {
    Table,
    Id,
    Name,
    Tier,
    Source,
}
