//! Guild administration checks.
//!
//! A user may manage a guild when Discord reports the Administrator permission for them there.
//! Guild lists are fetched from Discord and cached; upstream failures deny access.

use std::{collections::HashSet, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_settings::GuildSettingsRepository,
    error::AppError,
    model::guild::{AdminGuild, GuildSummary},
    service::{account::AccountService, cache::TtlCache, discord::DiscordApi},
    state::AppState,
};

const USER_GUILDS_TTL: Duration = Duration::from_secs(5 * 60);
const BOT_GUILDS_TTL: Duration = Duration::from_secs(5 * 60);
const FAILURE_TTL: Duration = Duration::from_secs(30);

/// Cached guild lists shared by all requests.
#[derive(Clone)]
pub struct GuildCache {
    /// Administered guilds per user id.
    user_guilds: TtlCache<u64, Vec<GuildSummary>>,
    bot_guilds: TtlCache<(), HashSet<u64>>,
}

impl Default for GuildCache {
    fn default() -> Self {
        Self {
            user_guilds: TtlCache::new(USER_GUILDS_TTL),
            bot_guilds: TtlCache::new(BOT_GUILDS_TTL),
        }
    }
}

impl GuildCache {
    pub async fn invalidate_user(&self, user_id: u64) {
        self.user_guilds.invalidate(&user_id).await;
    }

    pub async fn invalidate_bot_guilds(&self) {
        self.bot_guilds.clear().await;
    }
}

pub struct GuildAccessService<'a> {
    db: &'a DatabaseConnection,
    discord: &'a dyn DiscordApi,
    cache: &'a GuildCache,
    accounts: AccountService<'a>,
}

impl<'a> GuildAccessService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            db: &state.db,
            discord: state.discord.as_ref(),
            cache: &state.guild_cache,
            accounts: AccountService::new(state),
        }
    }

    /// Guilds in which the user holds the Administrator permission.
    ///
    /// Token refresh and Discord failures yield an empty list, cached for 30 seconds so a
    /// Discord outage does not turn into a request per page load.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildSummary>)` - Administered guilds, empty when they could not be fetched
    /// - `Err(AppError::DbErr)` - Database error reading the user's tokens
    pub async fn user_admin_guilds(&self, user_id: u64) -> Result<Vec<GuildSummary>, AppError> {
        if let Some(guilds) = self.cache.user_guilds.get(&user_id).await {
            return Ok(guilds);
        }

        match self.fetch_admin_guilds(user_id).await {
            Ok(guilds) => {
                self.cache.user_guilds.insert(user_id, guilds.clone()).await;
                Ok(guilds)
            }
            Err(AppError::DbErr(err)) => Err(err.into()),
            Err(err) => {
                tracing::warn!(
                    "Failed to fetch guilds of user {}, denying guild access: {}",
                    user_id,
                    err
                );
                self.cache
                    .user_guilds
                    .insert_for(user_id, Vec::new(), FAILURE_TTL)
                    .await;
                Ok(Vec::new())
            }
        }
    }

    async fn fetch_admin_guilds(&self, user_id: u64) -> Result<Vec<GuildSummary>, AppError> {
        let access_token = self.accounts.access_token(user_id).await?;
        let guilds = self.discord.user_guilds(&access_token).await?;

        Ok(guilds
            .iter()
            .filter(|guild| guild.permissions.administrator())
            .map(GuildSummary::from_guild_info)
            .collect())
    }

    /// Returns the guild if the user administers it.
    pub async fn admin_guild(
        &self,
        user_id: u64,
        guild_id: u64,
    ) -> Result<Option<GuildSummary>, AppError> {
        let guilds = self.user_admin_guilds(user_id).await?;

        Ok(guilds.into_iter().find(|guild| guild.id == guild_id))
    }

    /// Ids of the guilds the bot is a member of; empty when Discord cannot be reached.
    pub async fn bot_guild_ids(&self) -> HashSet<u64> {
        if let Some(ids) = self.cache.bot_guilds.get(&()).await {
            return ids;
        }

        match self.discord.bot_guilds().await {
            Ok(guilds) => {
                let ids: HashSet<u64> = guilds.iter().map(|guild| guild.id.get()).collect();
                self.cache.bot_guilds.insert((), ids.clone()).await;
                ids
            }
            Err(err) => {
                tracing::warn!("Failed to fetch bot guilds: {}", err);
                self.cache
                    .bot_guilds
                    .insert_for((), HashSet::new(), FAILURE_TTL)
                    .await;
                HashSet::new()
            }
        }
    }

    /// Administered guilds annotated with bot membership and settings presence, sorted by name.
    pub async fn list_admin_guilds(&self, user_id: u64) -> Result<Vec<AdminGuild>, AppError> {
        let guilds = self.user_admin_guilds(user_id).await?;
        if guilds.is_empty() {
            return Ok(Vec::new());
        }

        let bot_guilds = self.bot_guild_ids().await;
        let guild_ids: Vec<u64> = guilds.iter().map(|guild| guild.id).collect();
        let enabled = GuildSettingsRepository::new(self.db)
            .enabled_among(&guild_ids)
            .await?;

        let mut admin_guilds: Vec<AdminGuild> = guilds
            .into_iter()
            .map(|guild| AdminGuild {
                bot_in_guild: bot_guilds.contains(&guild.id),
                enabled: enabled.contains(&guild.id),
                guild,
            })
            .collect();
        admin_guilds.sort_by_cached_key(|admin_guild| admin_guild.guild.name.to_lowercase());

        Ok(admin_guilds)
    }

    /// Drops both the user's cached guilds and the bot guild list.
    pub async fn refresh(&self, user_id: u64) {
        self.cache.invalidate_user(user_id).await;
        self.cache.invalidate_bot_guilds().await;
    }
}
