//! Ledger domain models: wallets, catch counts and settlement plans.

use crate::{
    error::{economy::EconomyError, AppError},
    model::loot::{DrawResult, LootItem, Tier},
    util::parse::parse_user_id,
};

/// Largest number of units accepted in one explicit item sale.
pub const MAX_SALE_QUANTITY: u32 = 10_000;

/// A user's credit balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    /// Discord ID of the owner
    pub user_id: u64,
    pub balance: f64,
}

impl Wallet {
    /// Converts an entity model to a wallet domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Wallet)` - The converted wallet
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user ID is not a u64
    pub fn from_entity(entity: entity::wallet::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_user_id(entity.user_id)?,
            balance: entity.balance,
        })
    }
}

/// Number of units of one catalog item a user holds.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchCount {
    pub user_id: u64,
    pub item_id: i32,
    pub count: i32,
}

impl CatchCount {
    /// Converts an entity model to a catch count at the repository boundary.
    pub fn from_entity(entity: entity::catch::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_user_id(entity.user_id)?,
            item_id: entity.item_id,
            count: entity.count,
        })
    }
}

/// One inventory row: a held item, its count and whether the user protected it.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    pub item: LootItem,
    pub count: i32,
    pub favorite: bool,
}

impl InventoryEntry {
    /// Units that may be sold without giving up the last one.
    pub fn extras(&self) -> i32 {
        (self.count - 1).max(0)
    }
}

/// Which units a sale should include.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SaleSpec {
    /// Every non-favorite item down to a single unit.
    Dupes,
    /// Every non-favorite item of one tier down to a single unit.
    Tier(Tier),
    /// Up to `quantity` extras of one item; favorites are refused.
    Item { item_id: i32, quantity: u32 },
}

impl SaleSpec {
    /// Validates a tier sale from raw command input.
    ///
    /// # Returns
    /// - `Ok(SaleSpec::Tier)` - Tier within `1..=5`
    /// - `Err(EconomyError::InvalidTier)` - Tier out of range
    pub fn tier(value: i64) -> Result<Self, EconomyError> {
        Tier::from_value(value)
            .map(Self::Tier)
            .ok_or(EconomyError::InvalidTier(value))
    }

    /// Validates an explicit item sale from raw command input.
    ///
    /// # Returns
    /// - `Ok(SaleSpec::Item)` - Quantity within `1..=MAX_SALE_QUANTITY`
    /// - `Err(EconomyError::InvalidQuantity)` - Quantity out of range
    pub fn item(item_id: i32, quantity: i64) -> Result<Self, EconomyError> {
        if !(1..=MAX_SALE_QUANTITY as i64).contains(&quantity) {
            return Err(EconomyError::InvalidQuantity {
                value: quantity,
                max: MAX_SALE_QUANTITY,
            });
        }

        Ok(Self::Item {
            item_id,
            quantity: quantity as u32,
        })
    }
}

/// Change to a single catch count.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanLine {
    pub item: LootItem,
    /// Positive for catches, negative for sales.
    pub delta: i32,
}

/// Fully computed ledger change, ready to apply in one transaction.
///
/// Built in memory by the settlement planner; nothing is persisted until
/// `SettlementService::apply` commits it.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementPlan {
    pub user_id: u64,
    pub balance_before: f64,
    pub balance_after: f64,
    /// Count changes, one per item, ordered by item ID.
    pub lines: Vec<PlanLine>,
}

impl SettlementPlan {
    /// Net credit change (negative when the user paid).
    pub fn credits_delta(&self) -> f64 {
        self.balance_after - self.balance_before
    }

    pub fn units(&self) -> i32 {
        self.lines.iter().map(|line| line.delta.abs()).sum()
    }
}

/// Result of a settled cast.
#[derive(Debug, Clone, PartialEq)]
pub struct CastOutcome {
    pub draw: DrawResult,
    pub plan: SettlementPlan,
}
