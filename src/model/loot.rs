//! Catalog items, rarity tiers and draw requests/results.

use std::fmt;
use std::sync::Arc;

use crate::error::{economy::EconomyError, internal::InternalError, AppError};

/// Largest number of casts accepted in a single request.
pub const MAX_CAST_QUANTITY: u32 = 25;

/// Rarity classification; higher is rarer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    Epic = 4,
    Legendary = 5,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Common,
        Tier::Uncommon,
        Tier::Rare,
        Tier::Epic,
        Tier::Legendary,
    ];

    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Common),
            2 => Some(Self::Uncommon),
            3 => Some(Self::Rare),
            4 => Some(Self::Epic),
            5 => Some(Self::Legendary),
            _ => None,
        }
    }

    /// Credits paid per unit when an item of this tier is sold.
    pub fn unit_price(self) -> f64 {
        match self {
            Self::Common => 10.0,
            Self::Uncommon => 10.6,
            Self::Rare => 60.6,
            Self::Epic => 160.0,
            Self::Legendary => 500.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pool a catalog item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogSource {
    /// Drawn by bait-grade casts.
    Tiered,
    /// Drawn by the grade-independent bonus pool.
    Bonus,
}

impl CatalogSource {
    pub const ALL: [CatalogSource; 2] = [CatalogSource::Tiered, CatalogSource::Bonus];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tiered => "tiered",
            Self::Bonus => "bonus",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "tiered" => Some(Self::Tiered),
            "bonus" => Some(Self::Bonus),
            _ => None,
        }
    }
}

/// Read-only catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LootItem {
    pub id: i32,
    pub name: String,
    pub tier: Tier,
    pub source: CatalogSource,
}

impl LootItem {
    /// Converts an entity model to a loot item domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(LootItem)` - The converted catalog item
    /// - `Err(AppError::InternalErr)` - Stored tier or source is not recognised
    pub fn from_entity(entity: entity::loot_item::Model) -> Result<Self, AppError> {
        let tier = Tier::from_value(entity.tier as i64).ok_or(InternalError::InvalidTier {
            item_id: entity.id,
            tier: entity.tier,
        })?;
        let source =
            CatalogSource::parse(&entity.source).ok_or_else(|| InternalError::InvalidSource {
                item_id: entity.id,
                source_name: entity.source.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            tier,
            source,
        })
    }
}

/// Catalog partitioned by pool, shared cheaply between concurrent casts.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub tiered: Arc<Vec<LootItem>>,
    pub bonus: Arc<Vec<LootItem>>,
}

impl CatalogSnapshot {
    /// Looks an item up by case-insensitive name or by numeric ID.
    pub fn find(&self, query: &str) -> Option<&LootItem> {
        let query = query.trim();
        let by_id = query.parse::<i32>().ok();

        self.tiered
            .iter()
            .chain(self.bonus.iter())
            .find(|item| Some(item.id) == by_id || item.name.eq_ignore_ascii_case(query))
    }
}

/// Bait grade selecting the probability table of a cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaitGrade(u8);

impl BaitGrade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Validates a user-supplied grade.
    ///
    /// # Returns
    /// - `Ok(BaitGrade)` - Grade within `1..=4`
    /// - `Err(EconomyError::InvalidBait)` - Grade out of range
    pub fn new(value: i64) -> Result<Self, EconomyError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(EconomyError::InvalidBait(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Credits charged per cast with this bait.
    pub fn price(self) -> f64 {
        match self.0 {
            1 => 5.0,
            2 => 20.0,
            3 => 60.0,
            _ => 150.0,
        }
    }

    /// Whether an item of `tier` can be caught with this bait (`tier - grade >= 0`).
    pub fn can_catch(self, tier: Tier) -> bool {
        tier.value() - self.0 as i32 >= 0
    }
}

/// Parameters for a single cast command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRequest {
    pub grade: BaitGrade,
    pub quantity: u32,
}

impl DrawRequest {
    /// Validates grade and quantity from raw command input.
    ///
    /// # Returns
    /// - `Ok(DrawRequest)` - Valid request
    /// - `Err(EconomyError::InvalidBait)` - Grade outside `1..=4`
    /// - `Err(EconomyError::InvalidQuantity)` - Quantity outside `1..=MAX_CAST_QUANTITY`
    pub fn new(grade: i64, quantity: i64) -> Result<Self, EconomyError> {
        let grade = BaitGrade::new(grade)?;
        if !(1..=MAX_CAST_QUANTITY as i64).contains(&quantity) {
            return Err(EconomyError::InvalidQuantity {
                value: quantity,
                max: MAX_CAST_QUANTITY,
            });
        }

        Ok(Self {
            grade,
            quantity: quantity as u32,
        })
    }

    /// Total bait cost of the request.
    pub fn cost(&self) -> f64 {
        self.grade.price() * self.quantity as f64
    }
}

/// Items produced by one cast, sorted by item ID.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawResult {
    pub items: Vec<LootItem>,
    /// Number of tier-5 items in `items`; non-zero means the caller should announce it.
    pub legendary_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, name: &str, tier: Tier, source: CatalogSource) -> LootItem {
        LootItem {
            id,
            name: name.to_string(),
            tier,
            source,
        }
    }

    #[test]
    fn bait_grade_eligibility_ladder() {
        let grade_one = BaitGrade::new(1).unwrap();
        let grade_four = BaitGrade::new(4).unwrap();

        assert!(grade_one.can_catch(Tier::Common));
        assert!(grade_one.can_catch(Tier::Rare));
        assert!(!grade_four.can_catch(Tier::Rare));
        assert!(grade_four.can_catch(Tier::Epic));
        assert!(grade_four.can_catch(Tier::Legendary));
    }

    #[test]
    fn rejects_out_of_range_requests() {
        assert_eq!(DrawRequest::new(0, 1), Err(EconomyError::InvalidBait(0)));
        assert_eq!(DrawRequest::new(5, 1), Err(EconomyError::InvalidBait(5)));
        assert_eq!(
            DrawRequest::new(1, 0),
            Err(EconomyError::InvalidQuantity {
                value: 0,
                max: MAX_CAST_QUANTITY
            })
        );
        assert!(DrawRequest::new(4, MAX_CAST_QUANTITY as i64).is_ok());
    }

    #[test]
    fn request_cost_scales_with_quantity() {
        let request = DrawRequest::new(2, 3).unwrap();
        assert_eq!(request.cost(), 60.0);
    }

    #[test]
    fn converts_entity_and_rejects_bad_rows() {
        let model = entity::loot_item::Model {
            id: 7,
            name: "Carp".to_string(),
            tier: 2,
            source: "tiered".to_string(),
        };
        let loot = LootItem::from_entity(model.clone()).unwrap();
        assert_eq!(loot.tier, Tier::Uncommon);
        assert_eq!(loot.source, CatalogSource::Tiered);

        let bad_tier = entity::loot_item::Model { tier: 9, ..model.clone() };
        assert!(LootItem::from_entity(bad_tier).is_err());

        let bad_source = entity::loot_item::Model {
            source: "shop".to_string(),
            ..model
        };
        assert!(LootItem::from_entity(bad_source).is_err());
    }

    #[test]
    fn snapshot_finds_by_name_or_id() {
        let snapshot = CatalogSnapshot {
            tiered: Arc::new(vec![item(1, "Minnow", Tier::Common, CatalogSource::Tiered)]),
            bonus: Arc::new(vec![item(101, "Old Boot", Tier::Common, CatalogSource::Bonus)]),
        };

        assert_eq!(snapshot.find("minnow").map(|i| i.id), Some(1));
        assert_eq!(snapshot.find(" Old Boot ").map(|i| i.id), Some(101));
        assert_eq!(snapshot.find("101").map(|i| i.id), Some(101));
        assert!(snapshot.find("Kraken").is_none());
    }
}
