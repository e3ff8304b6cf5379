//! Favorite factory for creating test favorite rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks `item_id` as a favorite of `user_id`.
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    item_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id.into()),
        item_id: ActiveValue::Set(item_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
