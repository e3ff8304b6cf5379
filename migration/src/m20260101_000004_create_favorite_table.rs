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
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(string(Favorite::UserId))
                    .col(integer(Favorite::ItemId))
                    .col(timestamp_with_time_zone(Favorite::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_item_id")
                            .from(Favorite::Table, Favorite::ItemId)
                            .to(LootItem::Table, LootItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_favorite_user_item_unique")
                            .col(Favorite::UserId)
                            .col(Favorite::ItemId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    ItemId,
    CreatedAt,
}
