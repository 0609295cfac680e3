use serenity::all::User;

/// Creates a Discord user as returned by the current-user endpoint.
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, name: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "global_name": null,
        "avatar": null,
        "bot": false,
    }))
    .expect("Failed to create test user")
}
