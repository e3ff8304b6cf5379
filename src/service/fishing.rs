//! Fishing economy: casts, sales, inventory, balances and favorites.
//!
//! Every command follows the same shape. Inputs are validated and any randomness is drawn
//! before the user's lock is taken. Under the lock one transaction reads the wallet and
//! inventory, a pure planner turns them into a [`SettlementPlan`], and the plan is written and
//! committed in that same transaction. Dropping the future before commit leaves nothing
//! persisted.

use rand::{rngs::StdRng, SeedableRng};
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction};
use tracing::info;

use crate::{
    data::{catch::CatchRepository, favorite::FavoriteRepository, wallet::WalletRepository},
    engine::{loot, settlement},
    error::{economy::EconomyError, AppError},
    model::{
        ledger::{CastOutcome, InventoryEntry, SaleSpec, SettlementPlan, Wallet},
        loot::{DrawRequest, DrawResult, LootItem},
    },
    service::{
        catalog::{CatalogCache, CatalogService},
        settlement::{SettlementService, UserLocks},
    },
    state::AppState,
    util::random::RandomSource,
};

pub struct FishingService<'a> {
    db: &'a DatabaseConnection,
    catalog_cache: &'a CatalogCache,
    user_locks: &'a UserLocks,
    starting_balance: f64,
}

impl<'a> FishingService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            db: &state.db,
            catalog_cache: &state.catalog_cache,
            user_locks: &state.user_locks,
            starting_balance: state.starting_balance,
        }
    }

    fn catalog(&self) -> CatalogService<'a> {
        CatalogService::new(self.db, self.catalog_cache)
    }

    /// Casts with freshly seeded randomness and settles the catch.
    ///
    /// See [`FishingService::cast_with`].
    pub async fn cast(&self, user_id: u64, request: DrawRequest) -> Result<CastOutcome, AppError> {
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.cast_with(user_id, request, &mut rng).await
    }

    /// Draws a catch and charges the bait in one settlement.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the caster
    /// - `request` - Validated bait grade and quantity
    /// - `rng` - Randomness for the draw
    ///
    /// # Returns
    /// - `Ok(CastOutcome)` - Items caught and the applied plan
    /// - `Err(AppError::EconomyErr(NoEligibleItems))` - Catalog has nothing for this grade
    /// - `Err(AppError::EconomyErr(InsufficientFunds))` - Nothing was persisted
    /// - `Err(AppError::DbErr)` - Settlement failed and was rolled back
    pub async fn cast_with<R: RandomSource + ?Sized>(
        &self,
        user_id: u64,
        request: DrawRequest,
        rng: &mut R,
    ) -> Result<CastOutcome, AppError> {
        let snapshot = self.catalog().snapshot().await?;
        let draw = loot::draw(&request, &snapshot, rng)?;

        let _guard = self.user_locks.acquire(user_id).await;
        let ledger = SettlementService::begin(self.db).await?;

        let planned = self.plan_cast(ledger.tx(), user_id, &request, &draw).await;
        let plan = match planned {
            Ok(plan) => plan,
            Err(err) => return Err(ledger.abandon(err).await),
        };
        ledger.apply(&plan).await?;

        if draw.legendary_count > 0 {
            info!(
                "User {} caught {} legendary item(s) with grade {} bait",
                user_id,
                draw.legendary_count,
                request.grade.value()
            );
        }

        Ok(CastOutcome { draw, plan })
    }

    /// Sells units according to `spec` and credits the wallet.
    ///
    /// # Returns
    /// - `Ok(SettlementPlan)` - The applied plan
    /// - `Err(AppError::EconomyErr(NothingToSell))` - No unit qualified
    /// - `Err(AppError::DbErr)` - Settlement failed and was rolled back
    pub async fn sell(&self, user_id: u64, spec: SaleSpec) -> Result<SettlementPlan, AppError> {
        let _guard = self.user_locks.acquire(user_id).await;
        let ledger = SettlementService::begin(self.db).await?;

        let planned = self.plan_sale(ledger.tx(), user_id, &spec).await;
        let plan = match planned {
            Ok(plan) => plan,
            Err(err) => return Err(ledger.abandon(err).await),
        };
        ledger.apply(&plan).await?;

        Ok(plan)
    }

    async fn plan_cast(
        &self,
        tx: &DatabaseTransaction,
        user_id: u64,
        request: &DrawRequest,
        draw: &DrawResult,
    ) -> Result<SettlementPlan, AppError> {
        let wallet = WalletRepository::new(tx)
            .get_or_create(user_id, self.starting_balance)
            .await?;

        Ok(settlement::plan_catch(user_id, request, draw, wallet.balance)?)
    }

    async fn plan_sale(
        &self,
        tx: &DatabaseTransaction,
        user_id: u64,
        spec: &SaleSpec,
    ) -> Result<SettlementPlan, AppError> {
        let wallet = WalletRepository::new(tx)
            .get_or_create(user_id, self.starting_balance)
            .await?;
        let inventory = load_inventory(tx, user_id).await?;

        Ok(settlement::plan_sale(user_id, spec, &inventory, wallet.balance)?)
    }

    /// Resolves an item name or ID for an explicit sale.
    pub async fn resolve_item(&self, query: &str) -> Result<LootItem, AppError> {
        self.catalog().resolve(query).await
    }

    /// Lists held items, rarest first, then by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<InventoryEntry>)` - Non-zero counts with favorite flags
    /// - `Err(AppError)` - Database error or invalid row
    pub async fn inventory(&self, user_id: u64) -> Result<Vec<InventoryEntry>, AppError> {
        load_inventory(self.db, user_id).await
    }

    /// Gets the user's wallet, creating it on first use.
    pub async fn balance(&self, user_id: u64) -> Result<Wallet, AppError> {
        WalletRepository::new(self.db)
            .get_or_create(user_id, self.starting_balance)
            .await
    }

    /// Protects an item from bulk sales.
    ///
    /// # Returns
    /// - `Ok((LootItem, bool))` - The item and whether it was newly added
    /// - `Err(AppError::EconomyErr(NotFound))` - Unknown item or never caught by this user
    pub async fn add_favorite(
        &self,
        user_id: u64,
        query: &str,
    ) -> Result<(LootItem, bool), AppError> {
        let item = self.catalog().resolve(query).await?;

        let caught = CatchRepository::new(self.db)
            .find(user_id, item.id)
            .await?
            .is_some_and(|catch| catch.count > 0);
        if !caught {
            return Err(EconomyError::NotFound(format!(
                "You have not caught any {} yet.",
                item.name
            ))
            .into());
        }

        let created = FavoriteRepository::new(self.db)
            .create(user_id, item.id)
            .await?;

        Ok((item, created))
    }

    /// Removes an item from the user's favorites.
    ///
    /// # Returns
    /// - `Ok(LootItem)` - The item that was removed
    /// - `Err(AppError::EconomyErr(NotFound))` - Unknown item or not a favorite
    pub async fn remove_favorite(&self, user_id: u64, query: &str) -> Result<LootItem, AppError> {
        let item = self.catalog().resolve(query).await?;

        let removed = FavoriteRepository::new(self.db)
            .delete(user_id, item.id)
            .await?;
        if !removed {
            return Err(EconomyError::NotFound(format!(
                "{} is not one of your favorites.",
                item.name
            ))
            .into());
        }

        Ok(item)
    }

    /// Lists the user's favorites ordered by item ID.
    pub async fn favorites(&self, user_id: u64) -> Result<Vec<LootItem>, AppError> {
        FavoriteRepository::new(self.db).get_by_user(user_id).await
    }
}

async fn load_inventory<C: ConnectionTrait>(
    db: &C,
    user_id: u64,
) -> Result<Vec<InventoryEntry>, AppError> {
    let catches = CatchRepository::new(db).get_by_user(user_id).await?;
    let favorites = FavoriteRepository::new(db).item_ids(user_id).await?;

    let mut entries: Vec<InventoryEntry> = catches
        .into_iter()
        .map(|(catch, item)| InventoryEntry {
            favorite: favorites.contains(&item.id),
            count: catch.count,
            item,
        })
        .collect();
    entries.sort_by(|a, b| b.item.tier.cmp(&a.item.tier).then(a.item.id.cmp(&b.item.id)));

    Ok(entries)
}

#[cfg(test)]
mod test;
