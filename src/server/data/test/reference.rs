use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::reference::ReferenceRepository, model::filter::FilterKind};

/// Tests that reference lists come back ordered by name.
///
/// Expected: Ok with agencies sorted alphabetically and news sites untouched by agencies
#[tokio::test]
async fn lists_items_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_agency(db, "SpaceX").await?;
    factory::create_agency(db, "Arianespace").await?;
    factory::create_news_site(db, "SpaceNews").await?;

    let repo = ReferenceRepository::new(db);
    let agencies = repo.get_all(FilterKind::Agencies).await?;
    let news_sites = repo.get_all(FilterKind::NewsSites).await?;

    let names: Vec<_> = agencies.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Arianespace", "SpaceX"]);
    assert_eq!(news_sites.len(), 1);
    assert_eq!(news_sites[0].name, "SpaceNews");

    Ok(())
}
