//! Guild settings toggles and the scheduled event count.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_settings::GuildSettingsRepository,
    error::{settings::SettingsError, AppError},
    model::settings::{GuildSettings, UpdateSettingsParam},
};

pub struct GuildSettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a guild's settings.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Stored settings
    /// - `Err(SettingsError::GuildNotEnabled)` - The guild never enabled LiveLaunch
    pub async fn get(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        let settings = GuildSettingsRepository::new(self.db)
            .find(guild_id)
            .await?
            .ok_or(SettingsError::GuildNotEnabled(guild_id))?;

        Ok(settings)
    }

    /// Applies a partial settings update.
    ///
    /// Values are validated before anything is written. An update without fields only reads
    /// the current settings.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Settings after the update
    /// - `Err(SettingsError::ScheduledEventsOutOfRange)` - Invalid scheduled event count
    /// - `Err(SettingsError::GuildNotEnabled)` - Empty update for a guild without settings
    pub async fn update(
        &self,
        guild_id: u64,
        param: UpdateSettingsParam,
    ) -> Result<GuildSettings, AppError> {
        param.validate()?;

        if param.is_empty() {
            return self.get(guild_id).await;
        }

        let settings = GuildSettingsRepository::new(self.db)
            .update(guild_id, &param)
            .await?;
        tracing::debug!("Updated settings of guild {}: {:?}", guild_id, param);

        Ok(settings)
    }
}
