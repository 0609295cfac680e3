use super::*;

/// Tests storing a webhook for a guild without a settings row.
///
/// Expected: Ok with row created and both columns of the category set
#[tokio::test]
async fn stores_pair_and_creates_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = WebhookTarget {
        channel_id: 10,
        url: "https://discord.com/api/webhooks/5/token".to_string(),
    };

    let repo = GuildSettingsRepository::new(db);
    repo.set_webhook(7, WebhookCategory::Notifications, Some(&target))
        .await?;

    let row = entity::prelude::EnabledGuild::find_by_id(7)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.notification_channel_id, Some(10));
    assert_eq!(row.notification_webhook_url.as_deref(), Some(target.url.as_str()));
    assert_eq!(row.channel_id, None);
    assert_eq!(row.news_channel_id, None);

    Ok(())
}

/// Tests clearing a category.
///
/// Expected: Ok with both columns nulled and other categories untouched
#[tokio::test]
async fn clears_pair_together() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::enabled_guild::EnabledGuildFactory::new(db)
        .general_webhook(1, "https://discord.com/api/webhooks/1/a")
        .news_webhook(2, "https://discord.com/api/webhooks/2/b")
        .build()
        .await?;

    GuildSettingsRepository::new(db)
        .set_webhook(guild.guild_id as u64, WebhookCategory::General, None)
        .await?;

    let row = entity::prelude::EnabledGuild::find_by_id(guild.guild_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.channel_id, None);
    assert_eq!(row.webhook_url, None);
    assert_eq!(row.news_channel_id, Some(2));

    Ok(())
}

/// Tests clearing a category of a guild that has no settings row.
///
/// Expected: Ok without creating a row
#[tokio::test]
async fn clearing_without_row_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsRepository::new(db)
        .set_webhook(99, WebhookCategory::News, None)
        .await?;

    let row = entity::prelude::EnabledGuild::find_by_id(99).one(db).await?;
    assert!(row.is_none());

    Ok(())
}
