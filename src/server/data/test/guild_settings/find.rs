use super::*;

/// Tests reading a stored settings row into the domain model.
///
/// Expected: Ok(Some) with the webhook pair and integer toggles converted
#[tokio::test]
async fn converts_stored_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::enabled_guild::EnabledGuildFactory::new(db)
        .news_webhook(55, "https://discord.com/api/webhooks/1/abc")
        .agencies_mode(1)
        .scheduled_events(12)
        .build()
        .await?;

    let settings = GuildSettingsRepository::new(db)
        .find(guild.guild_id as u64)
        .await?
        .unwrap();

    assert_eq!(settings.general, None);
    assert_eq!(
        settings.news,
        Some(WebhookTarget {
            channel_id: 55,
            url: "https://discord.com/api/webhooks/1/abc".to_string()
        })
    );
    assert_eq!(settings.agencies_mode, FilterMode::Include);
    assert_eq!(settings.news_mode, FilterMode::Exclude);
    assert_eq!(settings.scheduled_events, 12);
    assert!(settings.se_launch);
    assert!(!settings.se_no_url);
    assert!(settings.toggles.t0_change);

    Ok(())
}

/// Tests reading a guild that never enabled LiveLaunch.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = GuildSettingsRepository::new(db).find(1).await?;

    assert!(settings.is_none());

    Ok(())
}
