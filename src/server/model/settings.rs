//! Guild settings domain model and parameters.
//!
//! The `enabled_guilds` row stores toggles as integers and each webhook as a pair of
//! nullable columns. The domain model turns toggles into booleans and every pair into a single
//! `Option<WebhookTarget>`, so a half-set pair cannot be represented past the repository.

use std::str::FromStr;

use url::Url;

use crate::{
    model::settings::{GuildSettingsDto, UpdateSettingsDto, WebhookDto},
    server::{error::settings::SettingsError, model::filter::FilterMode},
};

/// Upper bound for the number of Discord scheduled events the bot maintains.
pub const MAX_SCHEDULED_EVENTS: i32 = 50;

/// Delivery category with its own webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebhookCategory {
    /// Launch and event messages.
    General,
    News,
    Notifications,
}

impl WebhookCategory {
    /// Name given to webhooks created for this category.
    pub fn webhook_name(self) -> &'static str {
        match self {
            Self::General => "LiveLaunch",
            Self::News => "LiveLaunch News",
            Self::Notifications => "LiveLaunch Notifications",
        }
    }
}

impl FromStr for WebhookCategory {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Self::General),
            "news" => Ok(Self::News),
            "notifications" => Ok(Self::Notifications),
            other => Err(SettingsError::UnknownWebhookCategory(other.to_string())),
        }
    }
}

/// A channel together with the webhook URL delivering into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookTarget {
    pub channel_id: u64,
    pub url: String,
}

impl WebhookTarget {
    fn from_columns(channel_id: Option<i64>, url: Option<String>) -> Option<Self> {
        match (channel_id, url) {
            (Some(channel_id), Some(url)) => Some(Self {
                channel_id: channel_id as u64,
                url,
            }),
            _ => None,
        }
    }

    fn into_dto(self) -> WebhookDto {
        WebhookDto {
            channel_id: self.channel_id.to_string(),
        }
    }
}

/// Webhook id and token extracted from a stored webhook URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookCredentials {
    pub id: u64,
    pub token: String,
}

impl WebhookCredentials {
    /// Parses `https://discord.com/api[/v{n}]/webhooks/{id}/{token}`.
    ///
    /// # Returns
    /// - `Some(WebhookCredentials)` - The URL contains a numeric id followed by a token
    /// - `None` - The URL is malformed
    pub fn from_url(url: &str) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        let mut segments = url.path_segments()?;

        segments.find(|segment| *segment == "webhooks")?;
        let id = segments.next()?.parse::<u64>().ok()?;
        let token = segments.next().filter(|token| !token.is_empty())?;

        Some(Self {
            id,
            token: token.to_string(),
        })
    }
}

/// Per-launch notification switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationToggles {
    pub button_fc: bool,
    pub button_g4l: bool,
    pub button_sf: bool,
    pub end_status: bool,
    pub hold: bool,
    pub liftoff: bool,
    pub go: bool,
    pub tbc: bool,
    pub tbd: bool,
    pub deploy: bool,
    pub event: bool,
    pub launch: bool,
    pub t0_change: bool,
}

/// Settings of one guild as read by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    pub guild_id: u64,
    pub general: Option<WebhookTarget>,
    pub news: Option<WebhookTarget>,
    pub notifications: Option<WebhookTarget>,
    pub scheduled_events: i32,
    pub se_launch: bool,
    pub se_event: bool,
    pub se_no_url: bool,
    pub agencies_mode: FilterMode,
    pub news_mode: FilterMode,
    pub toggles: NotificationToggles,
}

impl GuildSettings {
    /// Converts an entity model to the settings domain model.
    pub fn from_entity(entity: entity::enabled_guild::Model) -> Self {
        Self {
            guild_id: entity.guild_id as u64,
            general: WebhookTarget::from_columns(entity.channel_id, entity.webhook_url),
            news: WebhookTarget::from_columns(entity.news_channel_id, entity.news_webhook_url),
            notifications: WebhookTarget::from_columns(
                entity.notification_channel_id,
                entity.notification_webhook_url,
            ),
            scheduled_events: entity.scheduled_events,
            se_launch: entity.se_launch != 0,
            se_event: entity.se_event != 0,
            se_no_url: entity.se_no_url != 0,
            agencies_mode: FilterMode::from_column(entity.agencies_include_exclude),
            news_mode: FilterMode::from_column(entity.news_include_exclude),
            toggles: NotificationToggles {
                button_fc: entity.notification_button_fc != 0,
                button_g4l: entity.notification_button_g4l != 0,
                button_sf: entity.notification_button_sf != 0,
                end_status: entity.notification_end_status != 0,
                hold: entity.notification_hold != 0,
                liftoff: entity.notification_liftoff != 0,
                go: entity.notification_go != 0,
                tbc: entity.notification_tbc != 0,
                tbd: entity.notification_tbd != 0,
                deploy: entity.notification_deploy != 0,
                event: entity.notification_event != 0,
                launch: entity.notification_launch != 0,
                t0_change: entity.notification_t0_change != 0,
            },
        }
    }

    /// Stored webhook of the given category.
    pub fn webhook(&self, category: WebhookCategory) -> Option<&WebhookTarget> {
        match category {
            WebhookCategory::General => self.general.as_ref(),
            WebhookCategory::News => self.news.as_ref(),
            WebhookCategory::Notifications => self.notifications.as_ref(),
        }
    }

    pub fn into_dto(self) -> GuildSettingsDto {
        GuildSettingsDto {
            guild_id: self.guild_id.to_string(),
            general: self.general.map(WebhookTarget::into_dto),
            news: self.news.map(WebhookTarget::into_dto),
            notifications: self.notifications.map(WebhookTarget::into_dto),
            scheduled_events: self.scheduled_events,
            se_launch: self.se_launch,
            se_event: self.se_event,
            se_no_url: self.se_no_url,
            agencies_mode: self.agencies_mode.into_dto(),
            news_mode: self.news_mode.into_dto(),
            notification_button_fc: self.toggles.button_fc,
            notification_button_g4l: self.toggles.button_g4l,
            notification_button_sf: self.toggles.button_sf,
            notification_end_status: self.toggles.end_status,
            notification_hold: self.toggles.hold,
            notification_liftoff: self.toggles.liftoff,
            notification_go: self.toggles.go,
            notification_tbc: self.toggles.tbc,
            notification_tbd: self.toggles.tbd,
            notification_deploy: self.toggles.deploy,
            notification_event: self.toggles.event,
            notification_launch: self.toggles.launch,
            notification_t0_change: self.toggles.t0_change,
        }
    }
}

/// Partial settings update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSettingsParam {
    pub scheduled_events: Option<i32>,
    pub se_launch: Option<bool>,
    pub se_event: Option<bool>,
    pub se_no_url: Option<bool>,
    pub notification_button_fc: Option<bool>,
    pub notification_button_g4l: Option<bool>,
    pub notification_button_sf: Option<bool>,
    pub notification_end_status: Option<bool>,
    pub notification_hold: Option<bool>,
    pub notification_liftoff: Option<bool>,
    pub notification_go: Option<bool>,
    pub notification_tbc: Option<bool>,
    pub notification_tbd: Option<bool>,
    pub notification_deploy: Option<bool>,
    pub notification_event: Option<bool>,
    pub notification_launch: Option<bool>,
    pub notification_t0_change: Option<bool>,
}

impl UpdateSettingsParam {
    /// Whether the update would not change any column.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Rejects values the bot cannot work with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(count) = self.scheduled_events {
            if !(0..=MAX_SCHEDULED_EVENTS).contains(&count) {
                return Err(SettingsError::ScheduledEventsOutOfRange(count));
            }
        }

        Ok(())
    }
}

impl From<UpdateSettingsDto> for UpdateSettingsParam {
    fn from(dto: UpdateSettingsDto) -> Self {
        Self {
            scheduled_events: dto.scheduled_events,
            se_launch: dto.se_launch,
            se_event: dto.se_event,
            se_no_url: dto.se_no_url,
            notification_button_fc: dto.notification_button_fc,
            notification_button_g4l: dto.notification_button_g4l,
            notification_button_sf: dto.notification_button_sf,
            notification_end_status: dto.notification_end_status,
            notification_hold: dto.notification_hold,
            notification_liftoff: dto.notification_liftoff,
            notification_go: dto.notification_go,
            notification_tbc: dto.notification_tbc,
            notification_tbd: dto.notification_tbd,
            notification_deploy: dto.notification_deploy,
            notification_event: dto.notification_event,
            notification_launch: dto.notification_launch,
            notification_t0_change: dto.notification_t0_change,
        }
    }
}
