use super::*;

/// Tests filtering a guild id list down to guilds with a settings row.
///
/// Expected: Ok with only the enabled guild ids
#[tokio::test]
async fn returns_only_enabled_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let enabled = factory::create_enabled_guild(db).await?;
    factory::create_enabled_guild(db).await?;

    let result = GuildSettingsRepository::new(db)
        .enabled_among(&[enabled.guild_id as u64, 999])
        .await?;

    assert_eq!(result.len(), 1);
    assert!(result.contains(&(enabled.guild_id as u64)));

    Ok(())
}

/// Tests the empty input shortcut.
///
/// Expected: Ok with an empty set
#[tokio::test]
async fn empty_input_returns_empty_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildSettingsRepository::new(db).enabled_among(&[]).await?;

    assert!(result.is_empty());

    Ok(())
}
