use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub item_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::loot_item::Entity",
        from = "Column::ItemId",
        to = "super::loot_item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LootItem,
}

impl Related<super::loot_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LootItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
