//! Pure computation engines.
//!
//! Nothing in this module touches the database, the catalog cache or Discord. Engines take
//! their inputs by value or reference, draw randomness through
//! [`RandomSource`](crate::util::random::RandomSource) and return fully computed results that
//! the service layer then persists.
//!
//! - `dice` - parses `NdM<suffix>` and evaluates the suffix once per rolled die
//! - `loot` - weighted rarity sampling for casts and the bonus pool
//! - `settlement` - turns draws and sales into ledger plans

pub mod dice;
pub mod loot;
pub mod settlement;
