//! Weighted rarity sampling for casts and the bonus pool.
//!
//! A cast draws `quantity` categorical outcomes from the bait grade's table and resolves each
//! tier to a uniformly chosen catalog item, then does the same against the bonus table. The
//! two pools are merged and sorted by item ID. Nothing here touches persistence.

use tracing::debug;

use crate::{
    error::economy::EconomyError,
    model::loot::{BaitGrade, CatalogSnapshot, DrawRequest, DrawResult, LootItem, Tier},
    util::random::RandomSource,
};

/// Categorical distribution over tiers; `None` means the slot yields nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityTable {
    pub entries: &'static [(Option<Tier>, f64)],
}

const GRADE_ONE: RarityTable = RarityTable {
    entries: &[
        (Some(Tier::Common), 0.56),
        (Some(Tier::Uncommon), 0.34),
        (Some(Tier::Rare), 0.10),
    ],
};

const GRADE_TWO: RarityTable = RarityTable {
    entries: &[
        (Some(Tier::Uncommon), 0.60),
        (Some(Tier::Rare), 0.30),
        (Some(Tier::Epic), 0.10),
    ],
};

const GRADE_THREE: RarityTable = RarityTable {
    entries: &[
        (Some(Tier::Rare), 0.55),
        (Some(Tier::Epic), 0.30),
        (Some(Tier::Legendary), 0.05),
        (None, 0.10),
    ],
};

const GRADE_FOUR: RarityTable = RarityTable {
    entries: &[
        (Some(Tier::Epic), 0.60),
        (Some(Tier::Legendary), 0.10),
        (None, 0.30),
    ],
};

/// Grade-independent table rolled once per cast on top of the bait table.
pub const BONUS_TABLE: RarityTable = RarityTable {
    entries: &[
        (Some(Tier::Common), 0.20),
        (Some(Tier::Uncommon), 0.10),
        (Some(Tier::Rare), 0.05),
        (Some(Tier::Epic), 0.015),
        (Some(Tier::Legendary), 0.00025),
        (None, 0.63475),
    ],
};

impl RarityTable {
    /// Probability table used for casts with `grade`.
    pub fn for_grade(grade: BaitGrade) -> Self {
        match grade.value() {
            1 => GRADE_ONE,
            2 => GRADE_TWO,
            3 => GRADE_THREE,
            _ => GRADE_FOUR,
        }
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }

    /// Draws one outcome by walking the cumulative weights.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<Tier> {
        let target = rng.unit() * self.total();
        let mut cumulative = 0.0;

        for (outcome, weight) in self.entries {
            cumulative += weight;
            if target < cumulative {
                return *outcome;
            }
        }

        // Floating point drift can leave `target` just past the final bound.
        self.entries.last().and_then(|(outcome, _)| *outcome)
    }
}

/// Draws `quantity` categorical outcomes from `table`.
pub fn sample_outcomes<R: RandomSource + ?Sized>(
    table: &RarityTable,
    quantity: u32,
    rng: &mut R,
) -> Vec<Option<Tier>> {
    (0..quantity).map(|_| table.sample(rng)).collect()
}

/// Maps each outcome to an item of that tier chosen uniformly from `pool`.
///
/// `None` outcomes and tiers with no items in `pool` yield nothing for that slot.
pub fn resolve_outcomes<R: RandomSource + ?Sized>(
    outcomes: &[Option<Tier>],
    pool: &[&LootItem],
    rng: &mut R,
) -> Vec<LootItem> {
    let mut items = Vec::with_capacity(outcomes.len());

    for tier in outcomes.iter().flatten() {
        let candidates: Vec<&LootItem> = pool
            .iter()
            .copied()
            .filter(|item| item.tier == *tier)
            .collect();
        if candidates.is_empty() {
            continue;
        }
        items.push(candidates[rng.index(candidates.len())].clone());
    }

    items
}

/// Merges both pools into a [`DrawResult`] sorted by item ID.
pub fn assemble(tiered: Vec<LootItem>, bonus: Vec<LootItem>) -> DrawResult {
    let mut items = tiered;
    items.extend(bonus);
    items.sort_by_key(|item| item.id);

    let legendary_count = items
        .iter()
        .filter(|item| item.tier == Tier::Legendary)
        .count() as u32;

    DrawResult {
        items,
        legendary_count,
    }
}

/// Performs one cast against `catalog`.
///
/// # Arguments
/// - `request` - Validated bait grade and quantity
/// - `catalog` - Current catalog snapshot
/// - `rng` - Randomness for tier sampling and item choice
///
/// # Returns
/// - `Ok(DrawResult)` - Up to `quantity` tiered items plus up to `quantity` bonus items
/// - `Err(EconomyError::NoEligibleItems)` - No tiered item is catchable with this grade
pub fn draw<R: RandomSource + ?Sized>(
    request: &DrawRequest,
    catalog: &CatalogSnapshot,
    rng: &mut R,
) -> Result<DrawResult, EconomyError> {
    let grade = request.grade;

    let eligible: Vec<&LootItem> = catalog
        .tiered
        .iter()
        .filter(|item| grade.can_catch(item.tier))
        .collect();
    if eligible.is_empty() {
        return Err(EconomyError::NoEligibleItems {
            grade: grade.value(),
        });
    }

    let outcomes = sample_outcomes(&RarityTable::for_grade(grade), request.quantity, rng);
    let tiered = resolve_outcomes(&outcomes, &eligible, rng);

    let bonus_pool: Vec<&LootItem> = catalog.bonus.iter().collect();
    let bonus_outcomes = sample_outcomes(&BONUS_TABLE, request.quantity, rng);
    let bonus = resolve_outcomes(&bonus_outcomes, &bonus_pool, rng);

    debug!(
        "Cast with grade {} x{}: {} tiered, {} bonus",
        grade.value(),
        request.quantity,
        tiered.len(),
        bonus.len()
    );

    Ok(assemble(tiered, bonus))
}
