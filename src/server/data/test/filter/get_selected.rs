use super::*;

/// Tests reading selections of each list separately.
///
/// Expected: Ok with agency and news selections kept apart
#[tokio::test]
async fn reads_selection_per_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, agencies, news_sites) =
        factory::helpers::create_guild_with_reference_data(db).await?;
    let guild_id = guild.guild_id as u64;

    let repo = FilterRepository::new(db);
    repo.replace(
        guild_id,
        FilterKind::Agencies,
        FilterMode::Exclude,
        &[agencies[1].agency_id],
    )
    .await?;

    assert_eq!(
        repo.get_selected(guild_id, FilterKind::Agencies).await?,
        vec![agencies[1].agency_id]
    );
    assert!(repo
        .get_selected(guild_id, FilterKind::NewsSites)
        .await?
        .is_empty());
    assert_eq!(news_sites.len(), 2);

    Ok(())
}
