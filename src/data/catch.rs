//! Catch count data repository.
//!
//! One row per `(user_id, item_id)` pair holds how many units of a catalog item a user owns.
//! Counts are changed by delta so the settlement service can apply catches and sales with the
//! same call.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::{ledger::CatchCount, loot::LootItem},
};

/// Repository providing database operations for per-user catch counts.
pub struct CatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatchRepository<'a, C> {
    /// Creates a new CatchRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `CatchRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the non-zero catch counts of a user joined with their catalog rows.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(Vec<(CatchCount, LootItem)>)` - Held items ordered by item ID
    /// - `Err(AppError)` - Database error or invalid row
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<(CatchCount, LootItem)>, AppError> {
        let rows = entity::prelude::Catch::find()
            .find_also_related(entity::prelude::LootItem)
            .filter(entity::catch::Column::UserId.eq(user_id.to_string()))
            .filter(entity::catch::Column::Count.gt(0))
            .order_by_asc(entity::catch::Column::ItemId)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(catch, item)| -> Result<(CatchCount, LootItem), AppError> {
                let item_id = catch.item_id;
                let item = item.ok_or(InternalError::MissingCatalogItem { item_id })?;
                Ok((CatchCount::from_entity(catch)?, LootItem::from_entity(item)?))
            })
            .collect()
    }

    /// Finds the count row of one item for a user.
    ///
    /// # Returns
    /// - `Ok(Some(CatchCount))` - Row exists, possibly with a count of zero
    /// - `Ok(None)` - User never held this item
    /// - `Err(AppError)` - Database error or invalid row
    pub async fn find(&self, user_id: u64, item_id: i32) -> Result<Option<CatchCount>, AppError> {
        let entity = self.find_entity(user_id, item_id).await?;

        entity.map(CatchCount::from_entity).transpose()
    }

    /// Adds `delta` to a user's count of one item, inserting the row when absent.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `item_id` - Catalog item ID
    /// - `delta` - Units to add; negative for sales
    ///
    /// # Returns
    /// - `Ok(CatchCount)` - Row after the change
    /// - `Err(AppError::DbErr(RecordNotFound))` - Negative delta for an item the user never held
    /// - `Err(AppError::DbErr(Custom))` - The change would make the count negative
    pub async fn add_count(
        &self,
        user_id: u64,
        item_id: i32,
        delta: i32,
    ) -> Result<CatchCount, AppError> {
        let now = Utc::now();

        let entity = match self.find_entity(user_id, item_id).await? {
            Some(existing) => {
                let count = existing.count + delta;
                if count < 0 {
                    return Err(DbErr::Custom(format!(
                        "catch count of item {} for user {} would become {}",
                        item_id, user_id, count
                    ))
                    .into());
                }

                let mut active: entity::catch::ActiveModel = existing.into();
                active.count = ActiveValue::Set(count);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None if delta <= 0 => {
                return Err(DbErr::RecordNotFound(format!(
                    "no catch of item {} for user {}",
                    item_id, user_id
                ))
                .into());
            }
            None => {
                entity::catch::ActiveModel {
                    id: ActiveValue::NotSet,
                    user_id: ActiveValue::Set(user_id.to_string()),
                    item_id: ActiveValue::Set(item_id),
                    count: ActiveValue::Set(delta),
                    updated_at: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?
            }
        };

        CatchCount::from_entity(entity)
    }

    async fn find_entity(
        &self,
        user_id: u64,
        item_id: i32,
    ) -> Result<Option<entity::catch::Model>, DbErr> {
        entity::prelude::Catch::find()
            .filter(entity::catch::Column::UserId.eq(user_id.to_string()))
            .filter(entity::catch::Column::ItemId.eq(item_id))
            .one(self.db)
            .await
    }
}
