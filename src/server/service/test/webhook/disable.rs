use super::*;

/// Tests disabling a configured category.
///
/// Expected: Ok with the pair cleared and the webhook deleted
#[tokio::test]
async fn clears_and_deletes_webhook() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let guild_id = guild_with_general_webhook(db).await?;
    let (state, discord) = state_with(db, FakeDiscord::default());

    let settings = WebhookService::new(&state)
        .disable(guild_id, WebhookCategory::General)
        .await?;

    assert!(settings.general.is_none());
    assert_eq!(stored_general(db, guild_id).await, (None, None));
    assert_eq!(discord.deleted_ids(), vec![1]);

    Ok(())
}

/// Tests disabling when Discord refuses the deletion.
///
/// Expected: Ok with the pair cleared regardless
#[tokio::test]
async fn delete_failure_still_disables() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let guild_id = guild_with_general_webhook(db).await?;
    let (state, discord) = state_with(db, FakeDiscord::default());
    discord.fail_delete(1, api_error(500, 0), 1);

    let settings = WebhookService::new(&state)
        .disable(guild_id, WebhookCategory::General)
        .await?;

    assert!(settings.general.is_none());
    assert!(discord.deleted_ids().is_empty());

    Ok(())
}

/// Tests disabling a category that has no webhook.
///
/// Expected: Ok with the settings unchanged and no Discord call
#[tokio::test]
async fn unconfigured_category_is_noop() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let guild_id = guild_with_general_webhook(db).await?;
    let (state, discord) = state_with(db, FakeDiscord::default());

    let settings = WebhookService::new(&state)
        .disable(guild_id, WebhookCategory::News)
        .await?;

    assert_eq!(settings.general.unwrap().channel_id, 5);
    assert!(discord.deleted_ids().is_empty());

    Ok(())
}

/// Tests disabling for a guild without settings.
///
/// Expected: Err(SettingsError::GuildNotEnabled)
#[tokio::test]
async fn guild_without_settings_is_rejected() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let (state, _) = state_with(db, FakeDiscord::default());

    let result = WebhookService::new(&state)
        .disable(123, WebhookCategory::General)
        .await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::GuildNotEnabled(123)))
    ));

    Ok(())
}
