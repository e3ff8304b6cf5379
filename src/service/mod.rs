//! Service layer coordinating repositories, engines and shared state.
//!
//! Services are constructed per command from `AppState` and borrow what they need. The fishing
//! service is the entry point for every economy command; it computes results with the pure
//! engines and hands the resulting plans to the settlement service.

pub mod cache;
pub mod catalog;
pub mod fishing;
pub mod settlement;
