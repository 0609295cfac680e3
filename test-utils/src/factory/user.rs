//! User factory for creating test dashboard users.

use crate::factory::helpers::{next_id, next_snowflake};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .discord_id(123456789)
///     .name("CustomUser")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: i64,
    name: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with a unique Discord ID and name `"User {n}"`.
    ///
    /// # Arguments
    /// - `db` - Database connection to insert the user into
    ///
    /// # Returns
    /// - `UserFactory` - Factory with default values
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            discord_id: next_snowflake(),
            name: format!("User {}", next_id()),
        }
    }

    /// Sets the Discord ID for the user.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID
    ///
    /// # Returns
    /// - `Self` - Factory for chaining
    pub fn discord_id(mut self, discord_id: i64) -> Self {
        self.discord_id = discord_id;
        self
    }

    /// Sets the name for the user.
    ///
    /// # Arguments
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Self` - Factory for chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
