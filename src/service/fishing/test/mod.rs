use rand::{rngs::StdRng, SeedableRng};
use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::loot_item::LootItemFactory};

use crate::{
    data::{catch::CatchRepository, wallet::WalletRepository},
    error::{economy::EconomyError, AppError},
    model::{
        ledger::SaleSpec,
        loot::{DrawRequest, Tier},
    },
    service::{
        catalog::CatalogCache, fishing::FishingService, settlement::UserLocks,
    },
    state::AppState,
};

mod inventory;
mod sell;

/// Seeds a small catalog: one tiered item per tier (two commons) and one bonus item.
async fn seed_catalog(db: &DatabaseConnection) -> Result<(), AppError> {
    for (id, tier) in [(1, 1), (2, 1), (5, 2), (8, 3), (11, 4), (13, 5)] {
        LootItemFactory::new(db).id(id).tier(tier).build().await?;
    }
    LootItemFactory::new(db)
        .id(101)
        .name("Old Boot")
        .source("bonus")
        .build()
        .await?;

    Ok(())
}

fn state(db: &DatabaseConnection) -> AppState {
    AppState {
        db: db.clone(),
        catalog_cache: CatalogCache::new(4),
        user_locks: UserLocks::new(),
        starting_balance: 100.0,
    }
}
