//! Favorite data repository.
//!
//! Favorites protect items from bulk sales. Rows are unique per `(user_id, item_id)`; the
//! repository checks before inserting so adding twice is a no-op rather than a constraint error.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::loot::LootItem,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the IDs of every item a user marked as favorite.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(HashSet<i32>)` - Favorite item IDs, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn item_ids(&self, user_id: u64) -> Result<HashSet<i32>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id.to_string()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|favorite| favorite.item_id).collect())
    }

    /// Gets a user's favorite items joined with their catalog rows, ordered by item ID.
    ///
    /// # Returns
    /// - `Ok(Vec<LootItem>)` - Favorite items
    /// - `Err(AppError)` - Database error or invalid row
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<LootItem>, AppError> {
        let rows = entity::prelude::Favorite::find()
            .find_also_related(entity::prelude::LootItem)
            .filter(entity::favorite::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::favorite::Column::ItemId)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(favorite, item)| -> Result<LootItem, AppError> {
                let item = item.ok_or(InternalError::MissingCatalogItem {
                    item_id: favorite.item_id,
                })?;
                LootItem::from_entity(item)
            })
            .collect()
    }

    /// Checks whether an item is a favorite of a user.
    pub async fn exists(&self, user_id: u64, item_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id.to_string()))
            .filter(entity::favorite::Column::ItemId.eq(item_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Marks an item as favorite.
    ///
    /// # Returns
    /// - `Ok(true)` - Favorite created
    /// - `Ok(false)` - Item was already a favorite
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn create(&self, user_id: u64, item_id: i32) -> Result<bool, DbErr> {
        if self.exists(user_id, item_id).await? {
            return Ok(false);
        }

        entity::favorite::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id.to_string()),
            item_id: ActiveValue::Set(item_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes an item from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(true)` - Favorite removed
    /// - `Ok(false)` - Item was not a favorite
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: u64, item_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id.to_string()))
            .filter(entity::favorite::Column::ItemId.eq(item_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
