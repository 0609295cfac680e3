use crate::server::{
    error::AppError, model::guild::Channel, service::discord::DiscordApi, state::AppState,
};

pub struct ChannelService<'a> {
    discord: &'a dyn DiscordApi,
}

impl<'a> ChannelService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            discord: state.discord.as_ref(),
        }
    }

    /// Text and announcement channels of a guild, in Discord's display order.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<Channel>, AppError> {
        let mut channels: Vec<Channel> = self
            .discord
            .guild_channels(guild_id)
            .await?
            .iter()
            .filter_map(Channel::from_guild_channel)
            .collect();
        channels.sort_by_key(|channel| (channel.position, channel.id));

        Ok(channels)
    }
}
