//! Tacklebox Test Utils
//!
//! Shared testing utilities for the tacklebox bot. This crate offers a builder for test
//! contexts backed by in-memory SQLite databases, factories that insert ledger and catalog rows,
//! and fixtures that build entity models without touching a database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts rows with sensible defaults
//! - **fixture**: In-memory entity models for unit tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn sells_dupes() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_ledger_tables().build().await?;
//!     let db = &test.db;
//!
//!     let item = factory::create_loot_item(db).await?;
//!     factory::create_catch(db, "42", item.id, 3).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
