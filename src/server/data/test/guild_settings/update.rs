use super::*;

/// Tests the first toggle of a guild without a settings row.
///
/// Expected: Ok with the row created using defaults and the toggle applied
#[tokio::test]
async fn creates_row_with_defaults_on_first_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = GuildSettingsRepository::new(db)
        .update(
            42,
            &UpdateSettingsParam {
                notification_hold: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(settings.guild_id, 42);
    assert!(!settings.toggles.hold);
    assert!(settings.toggles.liftoff);
    assert!(settings.se_launch);
    assert!(!settings.se_no_url);
    assert_eq!(settings.scheduled_events, 0);

    Ok(())
}

/// Tests that booleans are stored as 0/1 and untouched columns keep their values.
///
/// Expected: Ok with only the provided columns changed
#[tokio::test]
async fn stores_booleans_as_integers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::enabled_guild::EnabledGuildFactory::new(db)
        .scheduled_events(3)
        .build()
        .await?;

    GuildSettingsRepository::new(db)
        .update(
            guild.guild_id as u64,
            &UpdateSettingsParam {
                se_no_url: Some(true),
                notification_button_g4l: Some(false),
                ..Default::default()
            },
        )
        .await?;

    let row = entity::prelude::EnabledGuild::find_by_id(guild.guild_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.se_no_url, 1);
    assert_eq!(row.notification_button_g4l, 0);
    assert_eq!(row.notification_button_fc, 1);
    assert_eq!(row.scheduled_events, 3);

    Ok(())
}

/// Tests writing the scheduled event count.
///
/// Expected: Ok with the new count stored
#[tokio::test]
async fn updates_scheduled_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_enabled_guild(db).await?;

    let settings = GuildSettingsRepository::new(db)
        .update(
            guild.guild_id as u64,
            &UpdateSettingsParam {
                scheduled_events: Some(25),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(settings.scheduled_events, 25);

    Ok(())
}
