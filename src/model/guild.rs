use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A guild the current user administers.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GuildDto {
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
    /// Whether the LiveLaunch bot is a member of the guild.
    pub bot_in_guild: bool,
    /// Whether a settings row exists for the guild.
    pub enabled: bool,
}

/// A text channel webhooks can be created in.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ChannelDto {
    pub id: String,
    pub name: String,
    pub position: u16,
}
