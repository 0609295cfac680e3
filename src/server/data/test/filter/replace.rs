use super::*;

/// Tests the include-mode example: X unselected, Y selected.
///
/// Expected: exactly one row (guild, Y) and the mode column set to include; deselecting Y
/// removes the row again
#[tokio::test]
async fn include_mode_stores_only_selected_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, agencies, _) = factory::helpers::create_guild_with_reference_data(db).await?;
    let guild_id = guild.guild_id as u64;
    let y = agencies[1].agency_id;

    let repo = FilterRepository::new(db);
    repo.replace(guild_id, FilterKind::Agencies, FilterMode::Include, &[y])
        .await?;

    let rows = entity::prelude::Ll2AgencyFilter::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].guild_id, guild.guild_id);
    assert_eq!(rows[0].agency_id, y);

    let settings = entity::prelude::EnabledGuild::find_by_id(guild.guild_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(settings.agencies_include_exclude, 1);

    repo.replace(guild_id, FilterKind::Agencies, FilterMode::Include, &[])
        .await?;

    let rows = entity::prelude::Ll2AgencyFilter::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests that replacing a selection removes items no longer selected.
///
/// Expected: Ok with only the new selection stored
#[tokio::test]
async fn replaces_instead_of_merging() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _, news_sites) = factory::helpers::create_guild_with_reference_data(db).await?;
    let guild_id = guild.guild_id as u64;

    let repo = FilterRepository::new(db);
    repo.replace(
        guild_id,
        FilterKind::NewsSites,
        FilterMode::Exclude,
        &[news_sites[0].news_site_id],
    )
    .await?;
    repo.replace(
        guild_id,
        FilterKind::NewsSites,
        FilterMode::Exclude,
        &[news_sites[1].news_site_id],
    )
    .await?;

    assert_eq!(
        repo.get_selected(guild_id, FilterKind::NewsSites).await?,
        vec![news_sites[1].news_site_id]
    );

    Ok(())
}

/// Tests replacing a filter for a guild without settings row.
///
/// Expected: Ok with the row created in the same transaction
#[tokio::test]
async fn creates_settings_row_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agency = factory::create_agency(db, "ISRO").await?;

    FilterRepository::new(db)
        .replace(
            4242,
            FilterKind::Agencies,
            FilterMode::Exclude,
            &[agency.agency_id],
        )
        .await?;

    let settings = entity::prelude::EnabledGuild::find_by_id(4242).one(db).await?;
    assert!(settings.is_some());

    Ok(())
}

/// Tests that a failing insert leaves the previous selection in place.
///
/// Expected: Err from the foreign key and the old row still stored
#[tokio::test]
async fn failed_replace_rolls_back() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, agencies, _) = factory::helpers::create_guild_with_reference_data(db).await?;
    let guild_id = guild.guild_id as u64;

    let repo = FilterRepository::new(db);
    repo.replace(
        guild_id,
        FilterKind::Agencies,
        FilterMode::Exclude,
        &[agencies[0].agency_id],
    )
    .await?;

    let result = repo
        .replace(guild_id, FilterKind::Agencies, FilterMode::Include, &[-1])
        .await;

    assert!(result.is_err());
    assert_eq!(
        repo.get_selected(guild_id, FilterKind::Agencies).await?,
        vec![agencies[0].agency_id]
    );
    let settings = entity::prelude::EnabledGuild::find_by_id(guild.guild_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(settings.agencies_include_exclude, 0);

    Ok(())
}
