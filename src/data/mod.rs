//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each and convert rows into domain models
//! at the boundary. They are generic over [`sea_orm::ConnectionTrait`] so the same repository
//! runs on a plain connection or inside a settlement transaction.

pub mod catch;
pub mod favorite;
pub mod loot_item;
pub mod wallet;

#[cfg(test)]
mod test;
