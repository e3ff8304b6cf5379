//! Settlement planning: turns a draw or a sale into a [`SettlementPlan`].
//!
//! Plans are computed in memory from a balance and inventory read under the user's lock; the
//! settlement service applies them in one transaction.

use std::collections::BTreeMap;

use crate::{
    error::economy::EconomyError,
    model::{
        ledger::{InventoryEntry, PlanLine, SaleSpec, SettlementPlan},
        loot::{DrawRequest, DrawResult, LootItem},
    },
    util::number::round_credits,
};

/// Plans the ledger change for a completed draw.
///
/// # Arguments
/// - `user_id` - Discord ID of the caster
/// - `request` - The request the draw was made for, used to price the bait
/// - `draw` - Items caught
/// - `balance` - Wallet balance read under the user's lock
///
/// # Returns
/// - `Ok(SettlementPlan)` - +1 per caught item, balance reduced by the bait cost
/// - `Err(EconomyError::InsufficientFunds)` - `balance` is below the bait cost
pub fn plan_catch(
    user_id: u64,
    request: &DrawRequest,
    draw: &DrawResult,
    balance: f64,
) -> Result<SettlementPlan, EconomyError> {
    let cost = request.cost();
    if balance < cost {
        return Err(EconomyError::InsufficientFunds { balance, cost });
    }

    let mut counts: BTreeMap<i32, PlanLine> = BTreeMap::new();
    for item in &draw.items {
        counts
            .entry(item.id)
            .or_insert_with(|| PlanLine {
                item: item.clone(),
                delta: 0,
            })
            .delta += 1;
    }

    Ok(SettlementPlan {
        user_id,
        balance_before: balance,
        balance_after: round_credits(balance - cost),
        lines: counts.into_values().collect(),
    })
}

/// Plans the ledger change for a sale.
///
/// Favorites are never sold and every item keeps at least one unit.
///
/// # Arguments
/// - `user_id` - Discord ID of the seller
/// - `spec` - Which units to sell
/// - `inventory` - The seller's inventory read under their lock
/// - `balance` - Wallet balance read under the same lock
///
/// # Returns
/// - `Ok(SettlementPlan)` - Negative deltas per sold item, balance credited
/// - `Err(EconomyError::NothingToSell)` - No unit qualifies for the sale
pub fn plan_sale(
    user_id: u64,
    spec: &SaleSpec,
    inventory: &[InventoryEntry],
    balance: f64,
) -> Result<SettlementPlan, EconomyError> {
    let sellable = inventory.iter().filter(|entry| !entry.favorite);

    let mut lines: Vec<PlanLine> = match *spec {
        SaleSpec::Dupes => sellable
            .filter(|entry| entry.extras() > 0)
            .map(|entry| sale_line(&entry.item, entry.extras()))
            .collect(),
        SaleSpec::Tier(tier) => sellable
            .filter(|entry| entry.item.tier == tier && entry.extras() > 0)
            .map(|entry| sale_line(&entry.item, entry.extras()))
            .collect(),
        SaleSpec::Item { item_id, quantity } => sellable
            .filter(|entry| entry.item.id == item_id)
            .map(|entry| {
                let units = entry.extras().min(quantity.min(i32::MAX as u32) as i32);
                sale_line(&entry.item, units)
            })
            .filter(|line| line.delta < 0)
            .collect(),
    };

    if lines.is_empty() {
        return Err(EconomyError::NothingToSell);
    }
    lines.sort_by_key(|line| line.item.id);

    let credit: f64 = lines
        .iter()
        .map(|line| line.item.tier.unit_price() * (-line.delta) as f64)
        .sum();

    Ok(SettlementPlan {
        user_id,
        balance_before: balance,
        balance_after: round_credits(balance + credit),
        lines,
    })
}

fn sale_line(item: &LootItem, units: i32) -> PlanLine {
    PlanLine {
        item: item.clone(),
        delta: -units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::loot::{CatalogSource, Tier};

    fn item(id: i32, tier: Tier) -> LootItem {
        LootItem {
            id,
            name: format!("Item {id}"),
            tier,
            source: CatalogSource::Tiered,
        }
    }

    fn entry(id: i32, tier: Tier, count: i32, favorite: bool) -> InventoryEntry {
        InventoryEntry {
            item: item(id, tier),
            count,
            favorite,
        }
    }

    fn inventory() -> Vec<InventoryEntry> {
        vec![
            entry(13, Tier::Legendary, 3, true),
            entry(8, Tier::Rare, 1, false),
            entry(5, Tier::Uncommon, 4, false),
            entry(1, Tier::Common, 2, false),
            entry(2, Tier::Common, 6, true),
        ]
    }

    #[test]
    fn catch_charges_bait_and_aggregates_items() {
        let request = DrawRequest::new(1, 3).unwrap();
        let draw = DrawResult {
            items: vec![item(1, Tier::Common), item(1, Tier::Common), item(5, Tier::Uncommon)],
            legendary_count: 0,
        };

        let plan = plan_catch(7, &request, &draw, 100.0).unwrap();

        assert_eq!(plan.balance_after, 85.0);
        assert_eq!(plan.lines.len(), 2);
        assert_eq!((plan.lines[0].item.id, plan.lines[0].delta), (1, 2));
        assert_eq!((plan.lines[1].item.id, plan.lines[1].delta), (5, 1));
    }

    #[test]
    fn catch_with_empty_draw_still_charges() {
        let request = DrawRequest::new(4, 1).unwrap();
        let plan = plan_catch(7, &request, &DrawResult::default(), 150.0).unwrap();

        assert_eq!(plan.balance_after, 0.0);
        assert!(plan.lines.is_empty());
    }

    #[test]
    fn catch_rejects_insufficient_funds() {
        let request = DrawRequest::new(2, 2).unwrap();
        let result = plan_catch(7, &request, &DrawResult::default(), 39.99);

        assert_eq!(
            result,
            Err(EconomyError::InsufficientFunds {
                balance: 39.99,
                cost: 40.0
            })
        );
    }

    #[test]
    fn dupes_keep_one_and_skip_favorites() {
        let inventory = inventory();
        let plan = plan_sale(7, &SaleSpec::Dupes, &inventory, 0.0).unwrap();

        for line in &plan.lines {
            let held = inventory.iter().find(|e| e.item.id == line.item.id).unwrap();
            assert!(!held.favorite);
            assert!(held.count + line.delta >= 1);
        }
        let sold: Vec<(i32, i32)> = plan.lines.iter().map(|l| (l.item.id, l.delta)).collect();
        assert_eq!(sold, vec![(1, -1), (5, -3)]);
        assert_eq!(plan.balance_after, 41.8);
    }

    #[test]
    fn tier_sale_only_touches_that_tier() {
        let plan = plan_sale(7, &SaleSpec::Tier(Tier::Uncommon), &inventory(), 10.0).unwrap();

        assert_eq!(plan.lines.len(), 1);
        assert_eq!(plan.lines[0].item.id, 5);
        assert_eq!(plan.lines[0].delta, -3);
        assert_eq!(plan.balance_after, 41.8);
    }

    #[test]
    fn item_sale_caps_at_extras() {
        let spec = SaleSpec::Item {
            item_id: 5,
            quantity: 10,
        };
        let plan = plan_sale(7, &spec, &inventory(), 0.0).unwrap();
        assert_eq!(plan.lines[0].delta, -3);

        let spec = SaleSpec::Item {
            item_id: 5,
            quantity: 2,
        };
        let plan = plan_sale(7, &spec, &inventory(), 0.0).unwrap();
        assert_eq!(plan.lines[0].delta, -2);
        assert_eq!(plan.balance_after, 21.2);
    }

    #[test]
    fn nothing_to_sell_cases() {
        let inventory = inventory();
        for spec in [
            SaleSpec::Tier(Tier::Rare),
            SaleSpec::Tier(Tier::Legendary),
            SaleSpec::Tier(Tier::Epic),
            SaleSpec::Item { item_id: 2, quantity: 1 },
            SaleSpec::Item { item_id: 8, quantity: 1 },
            SaleSpec::Item { item_id: 99, quantity: 1 },
            SaleSpec::Item { item_id: 5, quantity: 0 },
        ] {
            assert_eq!(
                plan_sale(7, &spec, &inventory, 0.0),
                Err(EconomyError::NothingToSell),
                "{spec:?}"
            );
        }
        assert_eq!(
            plan_sale(7, &SaleSpec::Dupes, &[], 0.0),
            Err(EconomyError::NothingToSell)
        );
    }
}
