//! Catch factory for creating test catch count rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a catch count row.
///
/// The referenced loot item must already exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord user ID as string
/// - `item_id` - Catalog item ID
/// - `count` - Units held
///
/// # Returns
/// - `Ok(entity::catch::Model)` - Created catch row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_catch(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    item_id: i32,
    count: i32,
) -> Result<entity::catch::Model, DbErr> {
    entity::catch::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id.into()),
        item_id: ActiveValue::Set(item_id),
        count: ActiveValue::Set(count),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
