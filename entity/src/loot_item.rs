use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "loot_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    /// Rarity tier, 1 (common) through 5 (legendary).
    pub tier: i32,
    /// Pool the item is drawn from: `"tiered"` or `"bonus"`.
    pub source: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::catch::Entity")]
    Catch,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::catch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Catch.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
