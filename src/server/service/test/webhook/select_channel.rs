use std::sync::atomic::Ordering;

use sea_orm::ConnectionTrait;

use super::*;

/// Tests selecting a channel for a category that had none.
///
/// Expected: Ok with a new webhook named after the category stored for the channel
#[tokio::test]
async fn creates_and_stores_webhook() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_enabled_guild(db).await?;
    let guild_id = guild.guild_id as u64;
    let (state, discord) = state_with(db, discord_with_channel());

    let settings = WebhookService::new(&state)
        .select_channel(guild_id, WebhookCategory::General, 42)
        .await?;

    let target = settings.general.unwrap();
    assert_eq!(target.channel_id, 42);
    assert_eq!(target.url, "https://discord.com/api/webhooks/9000/token-9000");
    assert_eq!(
        discord.created.lock().unwrap().clone(),
        vec![(42, "LiveLaunch".to_string(), 9000)]
    );
    assert!(discord.deleted_ids().is_empty());

    Ok(())
}

/// Tests selecting a channel for a guild without settings.
///
/// Expected: Ok with the settings row created
#[tokio::test]
async fn creates_settings_row_when_missing() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let (state, _) = state_with(db, discord_with_channel());

    let settings = WebhookService::new(&state)
        .select_channel(77, WebhookCategory::News, 42)
        .await?;

    assert_eq!(settings.guild_id, 77);
    assert_eq!(settings.news.unwrap().channel_id, 42);
    assert!(settings.general.is_none());

    Ok(())
}

/// Tests a webhook creation Discord rejects.
///
/// Expected: Err(WebhookError::Create) and the stored webhook unchanged
#[tokio::test]
async fn failed_creation_keeps_previous_webhook() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let guild_id = guild_with_general_webhook(db).await?;

    let discord = discord_with_channel();
    *discord.create_error.lock().unwrap() = Some(api_error(403, 50013));
    let (state, discord) = state_with(db, discord);

    let result = WebhookService::new(&state)
        .select_channel(guild_id, WebhookCategory::General, 42)
        .await;

    assert!(matches!(
        result,
        Err(AppError::WebhookErr(WebhookError::Create(_)))
    ));
    assert_eq!(
        stored_general(db, guild_id).await,
        (Some(5), Some(OLD_URL.to_string()))
    );
    assert!(discord.deleted_ids().is_empty());

    Ok(())
}

/// Tests a creation failure showing that the bot lost access to the guild.
///
/// Expected: the cached bot guild list is dropped and fetched again on next use
#[tokio::test]
async fn lost_access_invalidates_bot_guilds() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let (state, discord) = state_with(db, discord_with_channel());

    GuildAccessService::new(&state).bot_guild_ids().await;
    *discord.create_error.lock().unwrap() = Some(api_error(403, 50001));

    let result = WebhookService::new(&state)
        .select_channel(10, WebhookCategory::General, 42)
        .await;
    assert!(result.is_err());

    GuildAccessService::new(&state).bot_guild_ids().await;
    assert_eq!(discord.bot_guild_calls.load(Ordering::SeqCst), 2);

    Ok(())
}

/// Tests moving a category to another channel.
///
/// Expected: Ok with the new webhook stored and the previous one deleted afterwards
#[tokio::test]
async fn replaces_and_deletes_previous_webhook() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let guild_id = guild_with_general_webhook(db).await?;
    let (state, discord) = state_with(db, discord_with_channel());

    let settings = WebhookService::new(&state)
        .select_channel(guild_id, WebhookCategory::General, 42)
        .await?;

    assert_eq!(settings.general.unwrap().channel_id, 42);
    assert_eq!(discord.created_ids(), vec![9000]);
    assert_eq!(discord.deleted_ids(), vec![1]);

    Ok(())
}

/// Tests replacing a webhook that was already deleted in Discord.
///
/// Expected: Ok, an unknown webhook counts as deleted
#[tokio::test]
async fn previously_deleted_webhook_counts_as_deleted() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let guild_id = guild_with_general_webhook(db).await?;
    let (state, discord) = state_with(db, discord_with_channel());
    discord.fail_delete(1, api_error(404, 10015), 1);

    let settings = WebhookService::new(&state)
        .select_channel(guild_id, WebhookCategory::General, 42)
        .await?;

    assert_eq!(settings.general.unwrap().channel_id, 42);
    assert_eq!(
        stored_general(db, guild_id).await,
        (
            Some(42),
            Some("https://discord.com/api/webhooks/9000/token-9000".to_string())
        )
    );

    Ok(())
}

/// Tests a rotation where the previous webhook cannot be deleted.
///
/// Expected: Err(WebhookError::ReplaceFailed), the category reset to no channel and the new
/// webhook deleted again
#[tokio::test]
async fn failed_rotation_resets_category() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let guild_id = guild_with_general_webhook(db).await?;
    let (state, discord) = state_with(db, discord_with_channel());
    discord.fail_delete(1, api_error(500, 0), 1);

    let result = WebhookService::new(&state)
        .select_channel(guild_id, WebhookCategory::General, 42)
        .await;

    assert!(matches!(
        result,
        Err(AppError::WebhookErr(WebhookError::ReplaceFailed(_)))
    ));
    assert_eq!(stored_general(db, guild_id).await, (None, None));
    assert_eq!(discord.deleted_ids(), vec![9000]);

    Ok(())
}

/// Tests that cleanup of a just-created webhook is retried.
///
/// Expected: the new webhook is deleted on the third attempt
#[tokio::test]
async fn cleanup_retries_transient_failures() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let guild_id = guild_with_general_webhook(db).await?;
    let (state, discord) = state_with(db, discord_with_channel());
    discord.fail_delete(1, api_error(500, 0), 1);
    discord.fail_delete(9000, api_error(502, 0), 2);

    let result = WebhookService::new(&state)
        .select_channel(guild_id, WebhookCategory::General, 42)
        .await;

    assert!(result.is_err());
    assert_eq!(discord.deleted_ids(), vec![9000]);

    Ok(())
}

/// Tests selecting a channel that is not among the guild's channels.
///
/// Expected: Err(SettingsError::ChannelNotInGuild) with no webhook created and the stored
/// webhook unchanged
#[tokio::test]
async fn rejects_channel_outside_guild() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let guild_id = guild_with_general_webhook(db).await?;
    let (state, discord) = state_with(db, discord_with_channel());

    let result = WebhookService::new(&state)
        .select_channel(guild_id, WebhookCategory::General, 424242)
        .await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::ChannelNotInGuild {
            channel_id: 424242,
            ..
        }))
    ));
    assert!(discord.created_ids().is_empty());
    assert!(discord.deleted_ids().is_empty());
    assert_eq!(
        stored_general(db, guild_id).await,
        (Some(5), Some(OLD_URL.to_string()))
    );

    Ok(())
}

/// Tests a rotation where neither the previous webhook can be deleted nor the category reset.
///
/// Expected: Err(AppError::DbErr) and the new webhook still deleted again
#[tokio::test]
async fn failed_reset_still_deletes_new_webhook() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let guild_id = guild_with_general_webhook(db).await?;
    db.execute_unprepared(
        "CREATE TRIGGER reject_general_reset BEFORE UPDATE ON enabled_guilds \
         WHEN NEW.channel_id IS NULL BEGIN SELECT RAISE(ABORT, 'reset rejected'); END;",
    )
    .await?;
    let (state, discord) = state_with(db, discord_with_channel());
    discord.fail_delete(1, api_error(500, 0), 1);

    let result = WebhookService::new(&state)
        .select_channel(guild_id, WebhookCategory::General, 42)
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(discord.created_ids(), vec![9000]);
    assert_eq!(discord.deleted_ids(), vec![9000]);

    Ok(())
}
