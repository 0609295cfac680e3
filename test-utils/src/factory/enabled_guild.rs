//! Factory for guild settings rows.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating `enabled_guilds` rows.
///
/// Defaults match the values the dashboard writes when a guild is first enabled: no
/// webhooks, no scheduled events, exclude mode for both filters, every notification on.
///
/// # Example
///
/// ```rust,ignore
/// let guild = EnabledGuildFactory::new(&db)
///     .general_webhook(10, "https://discord.com/api/webhooks/1/abc")
///     .scheduled_events(5)
///     .build()
///     .await?;
/// ```
pub struct EnabledGuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    general: (Option<i64>, Option<String>),
    news: (Option<i64>, Option<String>),
    notification: (Option<i64>, Option<String>),
    scheduled_events: i32,
    agencies_include_exclude: i32,
    news_include_exclude: i32,
}

impl<'a> EnabledGuildFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_snowflake(),
            general: (None, None),
            news: (None, None),
            notification: (None, None),
            scheduled_events: 0,
            agencies_include_exclude: 0,
            news_include_exclude: 0,
        }
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn general_webhook(mut self, channel_id: i64, url: impl Into<String>) -> Self {
        self.general = (Some(channel_id), Some(url.into()));
        self
    }

    pub fn news_webhook(mut self, channel_id: i64, url: impl Into<String>) -> Self {
        self.news = (Some(channel_id), Some(url.into()));
        self
    }

    pub fn notification_webhook(mut self, channel_id: i64, url: impl Into<String>) -> Self {
        self.notification = (Some(channel_id), Some(url.into()));
        self
    }

    pub fn scheduled_events(mut self, scheduled_events: i32) -> Self {
        self.scheduled_events = scheduled_events;
        self
    }

    /// Sets the agency filter mode (0 exclude, 1 include).
    pub fn agencies_mode(mut self, mode: i32) -> Self {
        self.agencies_include_exclude = mode;
        self
    }

    /// Sets the news filter mode (0 exclude, 1 include).
    pub fn news_mode(mut self, mode: i32) -> Self {
        self.news_include_exclude = mode;
        self
    }

    /// Builds and inserts the settings row into the database.
    pub async fn build(self) -> Result<entity::enabled_guild::Model, DbErr> {
        entity::enabled_guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.general.0),
            webhook_url: ActiveValue::Set(self.general.1),
            scheduled_events: ActiveValue::Set(self.scheduled_events),
            se_launch: ActiveValue::Set(1),
            se_event: ActiveValue::Set(1),
            se_no_url: ActiveValue::Set(0),
            agencies_include_exclude: ActiveValue::Set(self.agencies_include_exclude),
            news_channel_id: ActiveValue::Set(self.news.0),
            news_webhook_url: ActiveValue::Set(self.news.1),
            news_include_exclude: ActiveValue::Set(self.news_include_exclude),
            notification_channel_id: ActiveValue::Set(self.notification.0),
            notification_webhook_url: ActiveValue::Set(self.notification.1),
            notification_button_fc: ActiveValue::Set(1),
            notification_button_g4l: ActiveValue::Set(1),
            notification_button_sf: ActiveValue::Set(1),
            notification_end_status: ActiveValue::Set(1),
            notification_hold: ActiveValue::Set(1),
            notification_liftoff: ActiveValue::Set(1),
            notification_go: ActiveValue::Set(1),
            notification_tbc: ActiveValue::Set(1),
            notification_tbd: ActiveValue::Set(1),
            notification_deploy: ActiveValue::Set(1),
            notification_event: ActiveValue::Set(1),
            notification_launch: ActiveValue::Set(1),
            notification_t0_change: ActiveValue::Set(1),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a settings row with default values and a unique guild id.
pub async fn create_enabled_guild(
    db: &DatabaseConnection,
) -> Result<entity::enabled_guild::Model, DbErr> {
    EnabledGuildFactory::new(db).build().await
}
