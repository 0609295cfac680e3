use serenity::all::GuildChannel;

/// Creates a guild channel as returned by Discord's guild channels endpoint.
///
/// # Arguments
/// - `channel_id` - Discord channel ID
/// - `guild_id` - Guild the channel belongs to
/// - `name` - Channel name
/// - `kind` - Raw Discord channel type (0 text, 2 voice, 4 category, 5 news)
/// - `position` - Sorting position
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    position: u16,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": name,
        "type": kind,
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
    }))
    .expect("Failed to create test channel")
}
