use serenity::all::Webhook;

/// Creates an incoming webhook as returned by Discord on webhook creation.
///
/// # Arguments
/// - `webhook_id` - Discord webhook ID
/// - `channel_id` - Channel the webhook posts into
/// - `token` - Webhook token
///
/// # Panics
/// - If the JSON cannot be deserialized into a Webhook (indicates invalid test data)
pub fn create_test_webhook(webhook_id: u64, channel_id: u64, token: &str) -> Webhook {
    serde_json::from_value(serde_json::json!({
        "id": webhook_id.to_string(),
        "type": 1,
        "channel_id": channel_id.to_string(),
        "name": "LiveLaunch",
        "avatar": null,
        "token": token,
    }))
    .expect("Failed to create test webhook")
}
