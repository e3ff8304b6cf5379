use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Describes the schema of a test database.
///
/// Most service tests need the full ledger and call [`TestBuilder::with_ledger_tables`];
/// repository tests add only the tables they touch.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{LootItem, Catch};
///
/// let test = TestBuilder::new()
///     .with_table(LootItem)
///     .with_table(Catch)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let table = Schema::new(DbBackend::Sqlite).create_table_from_entity(entity);
        self.tables.push(table);
        self
    }

    /// Adds every table the fishing economy uses, in dependency order:
    /// - LootItem
    /// - Wallet
    /// - Catch
    /// - Favorite
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_ledger_tables(self) -> Self {
        self.with_table(LootItem)
            .with_table(Wallet)
            .with_table(Catch)
            .with_table(Favorite)
    }

    /// Opens the in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::connect(self.tables).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
