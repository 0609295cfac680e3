//! User data repository for database operations.

use crate::server::model::user::{UpsertUserParam, User};
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for dashboard users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user or updates the name of an existing one.
    ///
    /// # Arguments
    /// - `param` - Discord ID and current display name
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id as i64),
            name: ActiveValue::Set(param.name),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_column(entity::user::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that Discord ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_discord_id(&self, user_id: u64) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id as i64)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
