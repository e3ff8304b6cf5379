//! Wallet factory for creating test wallet rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a wallet for `user_id` holding `balance` credits.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord user ID as string
/// - `balance` - Starting balance
///
/// # Returns
/// - `Ok(entity::wallet::Model)` - Created wallet row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_wallet(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    balance: f64,
) -> Result<entity::wallet::Model, DbErr> {
    let now = Utc::now();
    entity::wallet::ActiveModel {
        user_id: ActiveValue::Set(user_id.into()),
        balance: ActiveValue::Set(balance),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
