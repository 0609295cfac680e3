use serenity::all::GuildInfo;

/// Creates a partial guild as returned by Discord's current-user guilds endpoint.
///
/// # Arguments
/// - `guild_id` - Discord guild ID
/// - `name` - Guild name
/// - `permissions` - Permission bits the current user holds in the guild
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildInfo (indicates invalid test data)
///
/// # Example
///
/// ```rust,ignore
/// // Administrator bit set
/// let guild = create_test_guild_info(123456789, "Test Guild", 0x8);
/// ```
pub fn create_test_guild_info(guild_id: u64, name: &str, permissions: u64) -> GuildInfo {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "owner": false,
        "permissions": permissions.to_string(),
        "features": [],
    }))
    .expect("Failed to create test guild info")
}
