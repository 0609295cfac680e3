use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::filter::FilterModeDto;

/// Channel a webhook category currently delivers to.
///
/// The webhook URL itself is a credential and never leaves the server.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct WebhookDto {
    pub channel_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GuildSettingsDto {
    pub guild_id: String,
    pub general: Option<WebhookDto>,
    pub news: Option<WebhookDto>,
    pub notifications: Option<WebhookDto>,
    pub scheduled_events: i32,
    pub se_launch: bool,
    pub se_event: bool,
    pub se_no_url: bool,
    pub agencies_mode: FilterModeDto,
    pub news_mode: FilterModeDto,
    pub notification_button_fc: bool,
    pub notification_button_g4l: bool,
    pub notification_button_sf: bool,
    pub notification_end_status: bool,
    pub notification_hold: bool,
    pub notification_liftoff: bool,
    pub notification_go: bool,
    pub notification_tbc: bool,
    pub notification_tbd: bool,
    pub notification_deploy: bool,
    pub notification_event: bool,
    pub notification_launch: bool,
    pub notification_t0_change: bool,
}

/// Partial settings update; omitted fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct UpdateSettingsDto {
    /// Number of Discord scheduled events to keep, between 0 and 50.
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

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SelectChannelDto {
    pub channel_id: String,
}
