use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_loot_item_table::LootItem;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Catch::Table)
                    .if_not_exists()
                    .col(pk_auto(Catch::Id))
                    .col(string(Catch::UserId))
                    .col(integer(Catch::ItemId))
                    .col(integer(Catch::Count).default(0))
                    .col(timestamp_with_time_zone(Catch::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_catch_item_id")
                            .from(Catch::Table, Catch::ItemId)
                            .to(LootItem::Table, LootItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_catch_user_item_unique")
                            .col(Catch::UserId)
                            .col(Catch::ItemId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Catch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Catch {
    Table,
    Id,
    UserId,
    ItemId,
    Count,
    UpdatedAt,
}
