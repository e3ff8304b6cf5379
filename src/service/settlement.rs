//! Transactional application of settlement plans.
//!
//! A plan is applied in one SeaORM transaction: every catch count delta is upserted, then the
//! wallet balance is written. Any failure rolls the whole transaction back, so a user never
//! gets items without paying or credits without giving up items.
//!
//! Callers hold the user's [`UserLocks`] guard across read, plan and apply so that two commands
//! from the same user cannot plan against the same stale balance.

use std::collections::HashMap;
use std::sync::Arc;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, error, warn};

use crate::{
    data::{catch::CatchRepository, wallet::WalletRepository},
    error::AppError,
    model::ledger::SettlementPlan,
};

/// Per-user async locks serializing ledger read-modify-write cycles.
///
/// Different users never contend. Entries nobody holds or waits on are pruned on the next
/// acquisition.
#[derive(Clone, Default)]
pub struct UserLocks {
    locks: Arc<Mutex<HashMap<u64, Arc<Mutex<()>>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `user_id`'s ledger.
    ///
    /// # Returns
    /// - `OwnedMutexGuard<()>` - Access is released when the guard is dropped
    pub async fn acquire(&self, user_id: u64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(user_id).or_default().clone()
        };

        lock.lock_owned().await
    }

    /// Number of users with a live lock entry.
    #[cfg(test)]
    pub async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}

/// One user's ledger change, from the first read to commit.
///
/// Reads that feed the plan go through [`SettlementService::tx`] so they see the same state the
/// plan is written over. Dropping the service without calling `apply` or `abandon` rolls back.
pub struct SettlementService {
    tx: DatabaseTransaction,
}

impl SettlementService {
    /// Opens the transaction the user's wallet and inventory are read and written in.
    ///
    /// # Returns
    /// - `Ok(SettlementService)` - Transaction started
    /// - `Err(AppError::DbErr)` - Could not begin the transaction
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, AppError> {
        Ok(Self {
            tx: db.begin().await?,
        })
    }

    /// Connection for reads belonging to this settlement.
    pub fn tx(&self) -> &DatabaseTransaction {
        &self.tx
    }

    /// Applies a plan and commits.
    ///
    /// # Arguments
    /// - `plan` - Count deltas and resulting balance for one user
    ///
    /// # Returns
    /// - `Ok(())` - Counts and balance committed together
    /// - `Err(AppError::DbErr)` - The write that failed; nothing was persisted
    pub async fn apply(self, plan: &SettlementPlan) -> Result<(), AppError> {
        if let Err(err) = Self::write(&self.tx, plan).await {
            warn!(
                "Rolling back settlement for user {}: {}",
                plan.user_id, err
            );
            return Err(self.abandon(err).await);
        }

        self.tx.commit().await?;
        debug!(
            "Settled {} units for user {}: balance {:.2} -> {:.2}",
            plan.units(),
            plan.user_id,
            plan.balance_before,
            plan.balance_after
        );

        Ok(())
    }

    /// Rolls back everything done in this settlement and returns `err` unchanged.
    ///
    /// A failing rollback is logged; the caller still sees the error that caused it.
    pub async fn abandon(self, err: AppError) -> AppError {
        if let Err(rollback_err) = self.tx.rollback().await {
            error!("Failed to roll back settlement: {}", rollback_err);
        }

        err
    }

    async fn write(tx: &DatabaseTransaction, plan: &SettlementPlan) -> Result<(), AppError> {
        let catches = CatchRepository::new(tx);
        for line in &plan.lines {
            catches
                .add_count(plan.user_id, line.item.id, line.delta)
                .await?;
        }

        WalletRepository::new(tx)
            .set_balance(plan.user_id, plan.balance_after)
            .await?;

        Ok(())
    }
}
