use std::sync::Arc;

use async_trait::async_trait;
use serenity::{
    all::{
        ChannelId, CreateAttachment, CreateWebhook, GuildChannel, GuildId, GuildInfo,
        GuildPagination, User, Webhook, WebhookId,
    },
    http::Http,
};

use crate::server::{error::discord::DiscordError, service::discord::DiscordApi};

const DISCORD_API_URL: &str = "https://discord.com/api/v10";

/// Maximum page size of `GET /users/@me/guilds`.
const GUILD_PAGE_SIZE: u64 = 200;

/// Discord client backed by `reqwest` for user-token calls and serenity's `Http` for bot calls.
pub struct DiscordClient {
    http_client: reqwest::Client,
    bot_http: Arc<Http>,
    avatar: Option<CreateAttachment>,
}

impl DiscordClient {
    /// # Arguments
    /// - `http_client` - Client used for requests authorized with a user's OAuth token
    /// - `bot_http` - Serenity HTTP client authorized with the bot token
    /// - `avatar` - Image uploaded as the avatar of every created webhook
    pub fn new(
        http_client: reqwest::Client,
        bot_http: Arc<Http>,
        avatar: Option<CreateAttachment>,
    ) -> Self {
        Self {
            http_client,
            bot_http,
            avatar,
        }
    }

    async fn get_with_bearer<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
    ) -> Result<T, DiscordError> {
        let value = self
            .http_client
            .get(format!("{}{}", DISCORD_API_URL, path))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(value)
    }
}

#[async_trait]
impl DiscordApi for DiscordClient {
    async fn current_user(&self, access_token: &str) -> Result<User, DiscordError> {
        self.get_with_bearer("/users/@me", access_token).await
    }

    async fn user_guilds(&self, access_token: &str) -> Result<Vec<GuildInfo>, DiscordError> {
        self.get_with_bearer("/users/@me/guilds", access_token).await
    }

    async fn bot_guilds(&self) -> Result<Vec<GuildInfo>, DiscordError> {
        let mut guilds = Vec::new();
        let mut after = None;

        loop {
            let page = self
                .bot_http
                .get_guilds(after.map(GuildPagination::After), Some(GUILD_PAGE_SIZE))
                .await?;

            let page_len = page.len() as u64;
            after = page.last().map(|guild| guild.id);
            guilds.extend(page);

            if page_len < GUILD_PAGE_SIZE {
                break;
            }
        }

        Ok(guilds)
    }

    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<GuildChannel>, DiscordError> {
        let channels = self.bot_http.get_channels(GuildId::new(guild_id)).await?;

        Ok(channels)
    }

    async fn create_webhook(&self, channel_id: u64, name: &str) -> Result<Webhook, DiscordError> {
        let mut builder = CreateWebhook::new(name);
        if let Some(avatar) = &self.avatar {
            builder = builder.avatar(avatar);
        }

        let webhook = ChannelId::new(channel_id)
            .create_webhook(self.bot_http.as_ref(), builder)
            .await?;

        Ok(webhook)
    }

    async fn delete_webhook(&self, webhook_id: u64, token: &str) -> Result<(), DiscordError> {
        self.bot_http
            .delete_webhook_with_token(WebhookId::new(webhook_id), token, None)
            .await?;

        Ok(())
    }
}
