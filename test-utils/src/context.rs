use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Isolated test environment backed by a private in-memory SQLite database.
///
/// Every `sqlite::memory:` connection opens a fresh database, so tests never observe each
/// other's catalog or ledger rows.
pub struct TestContext {
    /// Connection to the test database.
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Opens a new in-memory database and creates `tables` in order.
    ///
    /// # Arguments
    /// - `tables` - CREATE TABLE statements; referenced tables must come first
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context holding the connection
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn connect(tables: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for table in &tables {
            db.execute(table).await?;
        }

        Ok(Self { db })
    }
}
