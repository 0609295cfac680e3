//! Discord REST access.
//!
//! Everything the dashboard asks Discord goes through [`DiscordApi`]. Calls scoped to the
//! logged-in user take the user's OAuth access token; the others use the bot token.

use async_trait::async_trait;
use serenity::all::{GuildChannel, GuildInfo, User, Webhook};

use crate::server::error::discord::DiscordError;

pub mod client;
#[cfg(test)]
pub mod fake;

pub use client::DiscordClient;

#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// The user owning `access_token` (`GET /users/@me`).
    async fn current_user(&self, access_token: &str) -> Result<User, DiscordError>;

    /// Guilds the owner of `access_token` is a member of, with their permissions there.
    async fn user_guilds(&self, access_token: &str) -> Result<Vec<GuildInfo>, DiscordError>;

    /// Every guild the bot is a member of.
    async fn bot_guilds(&self) -> Result<Vec<GuildInfo>, DiscordError>;

    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<GuildChannel>, DiscordError>;

    /// Creates a webhook named `name` in the channel, using the bot's webhook avatar.
    async fn create_webhook(&self, channel_id: u64, name: &str) -> Result<Webhook, DiscordError>;

    /// Deletes a webhook through its token, which does not require channel permissions.
    async fn delete_webhook(&self, webhook_id: u64, token: &str) -> Result<(), DiscordError>;
}
