//! Wallet data repository.
//!
//! Wallets are created lazily with the configured starting balance the first time a user
//! touches the economy. Balances are only written through [`WalletRepository::set_balance`],
//! which the settlement service calls inside its transaction.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::ledger::Wallet};

pub struct WalletRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WalletRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the wallet of a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(Wallet))` - Wallet exists
    /// - `Ok(None)` - User has never used the economy
    /// - `Err(AppError)` - Database error or invalid stored user ID
    pub async fn find(&self, user_id: u64) -> Result<Option<Wallet>, AppError> {
        let entity = entity::prelude::Wallet::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Wallet::from_entity).transpose()
    }

    /// Gets the wallet of a user, creating it with `starting_balance` if absent.
    ///
    /// The insert ignores a conflicting row, so two first uses racing each other both end up
    /// reading the single wallet that won.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `starting_balance` - Balance of a newly created wallet
    ///
    /// # Returns
    /// - `Ok(Wallet)` - Existing or newly created wallet
    /// - `Err(AppError)` - Database error during query or insert
    pub async fn get_or_create(
        &self,
        user_id: u64,
        starting_balance: f64,
    ) -> Result<Wallet, AppError> {
        if let Some(wallet) = self.find(user_id).await? {
            return Ok(wallet);
        }

        let now = Utc::now();
        let wallet = entity::wallet::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            balance: ActiveValue::Set(starting_balance),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };
        entity::prelude::Wallet::insert(wallet)
            .on_conflict(
                OnConflict::column(entity::wallet::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.find(user_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("wallet of user {} after insert", user_id)).into()
        })
    }

    /// Overwrites the balance of an existing wallet.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `balance` - New balance
    ///
    /// # Returns
    /// - `Ok(())` - Balance written
    /// - `Err(DbErr::RecordNotUpdated)` - The user has no wallet
    /// - `Err(DbErr)` - Other database error
    pub async fn set_balance(&self, user_id: u64, balance: f64) -> Result<(), DbErr> {
        let result = entity::prelude::Wallet::update_many()
            .col_expr(entity::wallet::Column::Balance, Expr::value(balance))
            .col_expr(entity::wallet::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::wallet::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }
}
