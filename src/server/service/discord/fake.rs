//! In-memory `DiscordApi` for service and middleware tests.

use std::{
    collections::{HashMap, VecDeque},
    sync::{
        atomic::{AtomicU64, AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use serenity::all::{GuildChannel, GuildInfo, User, Webhook};
use test_utils::serenity::{create_test_user, create_test_webhook};

use crate::server::{error::discord::DiscordError, service::discord::DiscordApi};

/// Scriptable Discord double.
///
/// Responses are configured through the public fields before the test runs; created and
/// deleted webhooks are recorded for assertions.
pub struct FakeDiscord {
    pub user: Mutex<Result<User, DiscordError>>,
    pub user_guilds: Mutex<Result<Vec<GuildInfo>, DiscordError>>,
    pub bot_guilds: Mutex<Result<Vec<GuildInfo>, DiscordError>>,
    pub channels: Mutex<Result<Vec<GuildChannel>, DiscordError>>,
    /// Error returned by the next webhook creation.
    pub create_error: Mutex<Option<DiscordError>>,
    /// Errors returned by successive deletions of a webhook id; empty means success.
    pub delete_errors: Mutex<HashMap<u64, VecDeque<DiscordError>>>,
    /// `(channel_id, name, webhook_id)` of every created webhook.
    pub created: Mutex<Vec<(u64, String, u64)>>,
    /// Ids of successfully deleted webhooks.
    pub deleted: Mutex<Vec<u64>>,
    pub user_guild_calls: AtomicUsize,
    pub bot_guild_calls: AtomicUsize,
    next_webhook_id: AtomicU64,
}

impl Default for FakeDiscord {
    fn default() -> Self {
        Self {
            user: Mutex::new(Ok(create_test_user(1, "tester"))),
            user_guilds: Mutex::new(Ok(Vec::new())),
            bot_guilds: Mutex::new(Ok(Vec::new())),
            channels: Mutex::new(Ok(Vec::new())),
            create_error: Mutex::new(None),
            delete_errors: Mutex::new(HashMap::new()),
            created: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            user_guild_calls: AtomicUsize::new(0),
            bot_guild_calls: AtomicUsize::new(0),
            next_webhook_id: AtomicU64::new(9000),
        }
    }
}

impl FakeDiscord {
    pub fn with_user_guilds(guilds: Vec<GuildInfo>) -> Self {
        let fake = Self::default();
        *fake.user_guilds.lock().unwrap() = Ok(guilds);
        fake
    }

    pub fn with_channels(channels: Vec<GuildChannel>) -> Self {
        let fake = Self::default();
        *fake.channels.lock().unwrap() = Ok(channels);
        fake
    }

    /// Makes the next `count` deletions of `webhook_id` fail with `error`.
    pub fn fail_delete(&self, webhook_id: u64, error: DiscordError, count: usize) {
        self.delete_errors
            .lock()
            .unwrap()
            .insert(webhook_id, std::iter::repeat(error).take(count).collect());
    }

    pub fn created_ids(&self) -> Vec<u64> {
        self.created.lock().unwrap().iter().map(|c| c.2).collect()
    }

    pub fn deleted_ids(&self) -> Vec<u64> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscordApi for FakeDiscord {
    async fn current_user(&self, _access_token: &str) -> Result<User, DiscordError> {
        self.user.lock().unwrap().clone()
    }

    async fn user_guilds(&self, _access_token: &str) -> Result<Vec<GuildInfo>, DiscordError> {
        self.user_guild_calls.fetch_add(1, Ordering::SeqCst);
        self.user_guilds.lock().unwrap().clone()
    }

    async fn bot_guilds(&self) -> Result<Vec<GuildInfo>, DiscordError> {
        self.bot_guild_calls.fetch_add(1, Ordering::SeqCst);
        self.bot_guilds.lock().unwrap().clone()
    }

    async fn guild_channels(&self, _guild_id: u64) -> Result<Vec<GuildChannel>, DiscordError> {
        self.channels.lock().unwrap().clone()
    }

    async fn create_webhook(&self, channel_id: u64, name: &str) -> Result<Webhook, DiscordError> {
        if let Some(error) = self.create_error.lock().unwrap().take() {
            return Err(error);
        }

        let webhook_id = self.next_webhook_id.fetch_add(1, Ordering::SeqCst);
        self.created
            .lock()
            .unwrap()
            .push((channel_id, name.to_string(), webhook_id));

        Ok(create_test_webhook(
            webhook_id,
            channel_id,
            &format!("token-{}", webhook_id),
        ))
    }

    async fn delete_webhook(&self, webhook_id: u64, _token: &str) -> Result<(), DiscordError> {
        let error = self
            .delete_errors
            .lock()
            .unwrap()
            .get_mut(&webhook_id)
            .and_then(|errors| errors.pop_front());

        match error {
            Some(error) => Err(error),
            None => {
                self.deleted.lock().unwrap().push(webhook_id);
                Ok(())
            }
        }
    }
}
