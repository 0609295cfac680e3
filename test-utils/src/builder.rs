use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add the entity tables a test needs, then call `build()` to get a `TestContext` with an
/// in-memory SQLite database containing exactly those tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Account, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Account)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
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
    /// Tables are created in the order they were added, so referenced tables must be added
    /// before the tables holding foreign keys to them.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the CREATE TABLE statement from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the dashboard user tables: `User` and `Account`.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(Account)
    }

    /// Adds every table the bot shares with the dashboard.
    ///
    /// Adds, in dependency order:
    /// - EnabledGuild
    /// - Ll2Agency
    /// - NewsSite
    /// - Ll2AgencyFilter
    /// - NewsFilter
    /// - NotificationCountdown
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_settings_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_settings_tables(self) -> Self {
        self.with_table(EnabledGuild)
            .with_table(Ll2Agency)
            .with_table(NewsSite)
            .with_table(Ll2AgencyFilter)
            .with_table(NewsFilter)
            .with_table(NotificationCountdown)
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database connected and tables created
    /// - `Err(TestError::Database)` - Failed to connect or to create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
