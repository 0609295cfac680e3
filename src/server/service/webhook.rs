//! Webhook provisioning for the bot's delivery categories.
//!
//! Selecting a channel always creates a fresh webhook before the stored one is deleted, so the
//! bot keeps a working webhook until the new one is stored. When the old webhook cannot be
//! deleted the category is reset to no channel, and the new webhook is deleted again.

use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_settings::GuildSettingsRepository,
    error::{
        discord::DiscordError, settings::SettingsError, webhook::WebhookError, AppError,
    },
    model::settings::{GuildSettings, WebhookCategory, WebhookCredentials, WebhookTarget},
    service::{channel::ChannelService, discord::DiscordApi, guild::GuildCache},
    state::AppState,
};

const CLEANUP_ATTEMPTS: u32 = 3;
const CLEANUP_BACKOFF: Duration = Duration::from_millis(100);

pub struct WebhookService<'a> {
    db: &'a DatabaseConnection,
    discord: &'a dyn DiscordApi,
    guild_cache: &'a GuildCache,
    channels: ChannelService<'a>,
}

impl<'a> WebhookService<'a> {
    /// Creates a new WebhookService over the shared application state.
    ///
    /// # Arguments
    /// - `state` - Application state holding the database and the Discord client
    ///
    /// # Returns
    /// - `WebhookService` - New service instance
    pub fn new(state: &'a AppState) -> Self {
        Self {
            db: &state.db,
            discord: state.discord.as_ref(),
            guild_cache: &state.guild_cache,
            channels: ChannelService::new(state),
        }
    }

    /// Points a category at a channel by creating a webhook there.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the channel belongs to
    /// - `category` - Delivery category to configure
    /// - `channel_id` - Channel to deliver into
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Settings with the new webhook stored
    /// - `Err(SettingsError::ChannelNotInGuild)` - The channel is not a text or announcement
    ///   channel of the guild; nothing was changed
    /// - `Err(WebhookError::Create)` - Discord refused the webhook; nothing was changed
    /// - `Err(WebhookError::ReplaceFailed)` - The previous webhook could not be deleted; the
    ///   category now has no channel
    /// - `Err(AppError::DbErr)` - Database error; a created webhook is deleted again
    pub async fn select_channel(
        &self,
        guild_id: u64,
        category: WebhookCategory,
        channel_id: u64,
    ) -> Result<GuildSettings, AppError> {
        let settings_repo = GuildSettingsRepository::new(self.db);

        let channels = self.channels.list(guild_id).await?;
        if !channels.iter().any(|channel| channel.id == channel_id) {
            return Err(SettingsError::ChannelNotInGuild {
                channel_id,
                guild_id,
            }
            .into());
        }

        let previous = settings_repo
            .find(guild_id)
            .await?
            .and_then(|settings| settings.webhook(category).cloned());

        let webhook = match self
            .discord
            .create_webhook(channel_id, category.webhook_name())
            .await
        {
            Ok(webhook) => webhook,
            Err(err) => {
                if err.indicates_lost_guild_access() {
                    self.guild_cache.invalidate_bot_guilds().await;
                }
                return Err(WebhookError::Create(err).into());
            }
        };

        let webhook_id = webhook.id.get();
        let Ok(url) = webhook.url() else {
            return Err(WebhookError::Create(DiscordError::MissingWebhookToken(webhook_id)).into());
        };
        let Some(created) = WebhookCredentials::from_url(&url) else {
            return Err(WebhookError::Create(DiscordError::MissingWebhookToken(webhook_id)).into());
        };

        let target = WebhookTarget { channel_id, url };
        if let Err(err) = settings_repo
            .set_webhook(guild_id, category, Some(&target))
            .await
        {
            self.delete_with_retry(&created).await;
            return Err(err.into());
        }

        tracing::info!(
            "Created webhook {} in channel {} of guild {} for {:?}",
            webhook_id,
            channel_id,
            guild_id,
            category
        );

        if let Some(previous) = previous {
            if let Err(err) = self.delete_stored(&previous).await {
                tracing::warn!(
                    "Failed to delete previous {:?} webhook of guild {}, resetting channel: {}",
                    category,
                    guild_id,
                    err
                );
                let reset = settings_repo.set_webhook(guild_id, category, None).await;
                self.delete_with_retry(&created).await;
                reset?;

                return Err(WebhookError::ReplaceFailed(err).into());
            }
        }

        self.current_settings(guild_id).await
    }

    /// Stops delivery for a category.
    ///
    /// The stored webhook is cleared first; deleting it on Discord is best effort.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Settings with the category cleared
    /// - `Err(SettingsError::GuildNotEnabled)` - The guild has no settings
    pub async fn disable(
        &self,
        guild_id: u64,
        category: WebhookCategory,
    ) -> Result<GuildSettings, AppError> {
        let settings_repo = GuildSettingsRepository::new(self.db);

        let settings = self.current_settings(guild_id).await?;
        let Some(previous) = settings.webhook(category).cloned() else {
            return Ok(settings);
        };

        settings_repo.set_webhook(guild_id, category, None).await?;
        tracing::info!("Disabled {:?} webhook of guild {}", category, guild_id);

        if let Err(err) = self.delete_stored(&previous).await {
            tracing::warn!(
                "Failed to delete disabled {:?} webhook of guild {}: {}",
                category,
                guild_id,
                err
            );
        }

        self.current_settings(guild_id).await
    }

    async fn current_settings(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        let settings = GuildSettingsRepository::new(self.db)
            .find(guild_id)
            .await?
            .ok_or(SettingsError::GuildNotEnabled(guild_id))?;

        Ok(settings)
    }

    /// Deletes a stored webhook. A webhook Discord no longer knows counts as deleted.
    async fn delete_stored(&self, target: &WebhookTarget) -> Result<(), DiscordError> {
        let Some(credentials) = WebhookCredentials::from_url(&target.url) else {
            tracing::warn!(
                "Stored webhook URL for channel {} is malformed, skipping deletion",
                target.channel_id
            );
            return Ok(());
        };

        match self
            .discord
            .delete_webhook(credentials.id, &credentials.token)
            .await
        {
            Err(err) if err.is_not_found() => {
                tracing::debug!("Webhook {} was already deleted", credentials.id);
                Ok(())
            }
            result => result,
        }
    }

    /// Deletes a webhook the dashboard just created, retrying with a short backoff.
    async fn delete_with_retry(&self, credentials: &WebhookCredentials) {
        for attempt in 1..=CLEANUP_ATTEMPTS {
            match self
                .discord
                .delete_webhook(credentials.id, &credentials.token)
                .await
            {
                Ok(()) => return,
                Err(err) if err.is_not_found() => return,
                Err(err) => {
                    tracing::warn!(
                        "Attempt {} to delete webhook {} failed: {}",
                        attempt,
                        credentials.id,
                        err
                    );
                    if attempt < CLEANUP_ATTEMPTS {
                        tokio::time::sleep(CLEANUP_BACKOFF * attempt).await;
                    }
                }
            }
        }

        tracing::error!(
            "Webhook {} could not be deleted after {} attempts and is orphaned",
            credentials.id,
            CLEANUP_ATTEMPTS
        );
    }
}
