//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so that services
//! and engines never see loosely typed rows. Parameter types describe a single operation's input.

pub mod dice;
pub mod ledger;
pub mod loot;
