//! Notification countdowns.
//!
//! A guild gets notified this long before each launch. Countdowns are unique per guild and
//! capped at `MAX_COUNTDOWNS_PER_GUILD`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::countdown::CountdownRepository,
    error::{settings::SettingsError, AppError},
    model::countdown::{Countdown, CreateCountdownParam, MAX_COUNTDOWNS_PER_GUILD},
};

pub struct CountdownService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountdownService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a guild's countdowns, shortest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Countdown>)` - Stored countdowns, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list(&self, guild_id: u64) -> Result<Vec<Countdown>, AppError> {
        let countdowns = CountdownRepository::new(self.db)
            .get_by_guild(guild_id)
            .await?;

        Ok(countdowns)
    }

    /// Adds a countdown.
    ///
    /// # Returns
    /// - `Ok(Countdown)` - The stored countdown
    /// - `Err(SettingsError::CountdownEmpty)` / `Err(SettingsError::CountdownOutOfRange)` -
    ///   Invalid components
    /// - `Err(SettingsError::CountdownLimitReached)` - The guild already has 64 countdowns
    /// - `Err(SettingsError::DuplicateCountdown)` - The same lead time already exists
    pub async fn create(
        &self,
        guild_id: u64,
        param: CreateCountdownParam,
    ) -> Result<Countdown, AppError> {
        let countdown_repo = CountdownRepository::new(self.db);

        let minutes = param.total_minutes()?;

        if countdown_repo.count_by_guild(guild_id).await? >= MAX_COUNTDOWNS_PER_GUILD {
            return Err(SettingsError::CountdownLimitReached(MAX_COUNTDOWNS_PER_GUILD).into());
        }

        if countdown_repo.exists(guild_id, minutes).await? {
            return Err(SettingsError::DuplicateCountdown(minutes).into());
        }

        let countdown = countdown_repo.create(guild_id, minutes).await?;
        tracing::debug!("Added {} minute countdown to guild {}", minutes, guild_id);

        Ok(countdown)
    }

    /// Removes a countdown by its total minutes.
    pub async fn delete(&self, guild_id: u64, minutes: i32) -> Result<(), AppError> {
        let deleted = CountdownRepository::new(self.db)
            .delete(guild_id, minutes)
            .await?;

        if !deleted {
            return Err(SettingsError::CountdownNotFound(minutes).into());
        }

        Ok(())
    }
}
