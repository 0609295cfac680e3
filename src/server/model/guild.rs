//! Guild and channel models built from Discord API objects.

use serenity::all::{ChannelType, GuildChannel, GuildInfo};

use crate::model::guild::{ChannelDto, GuildDto};

/// Minimal guild information kept in the per-user guild cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub id: u64,
    pub name: String,
    pub icon_url: Option<String>,
}

impl GuildSummary {
    pub fn from_guild_info(guild: &GuildInfo) -> Self {
        Self {
            id: guild.id.get(),
            name: guild.name.clone(),
            icon_url: guild.icon_url(),
        }
    }
}

/// A guild the user administers, annotated for the guild picker.
#[derive(Debug, Clone)]
pub struct AdminGuild {
    pub guild: GuildSummary,
    pub bot_in_guild: bool,
    pub enabled: bool,
}

impl AdminGuild {
    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.guild.id.to_string(),
            name: self.guild.name,
            icon_url: self.guild.icon_url,
            bot_in_guild: self.bot_in_guild,
            enabled: self.enabled,
        }
    }
}

/// A channel webhooks can be created in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: u64,
    pub name: String,
    pub position: u16,
}

impl Channel {
    /// Converts a guild channel, returning `None` for channels that cannot host webhooks.
    ///
    /// Webhooks can be created in text and announcement channels only.
    pub fn from_guild_channel(channel: &GuildChannel) -> Option<Self> {
        match channel.kind {
            ChannelType::Text | ChannelType::News => Some(Self {
                id: channel.id.get(),
                name: channel.name.clone(),
                position: channel.position,
            }),
            _ => None,
        }
    }

    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.id.to_string(),
            name: self.name,
            position: self.position,
        }
    }
}
