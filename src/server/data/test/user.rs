use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::user::UserRepository, model::user::UpsertUserParam};

/// Tests creating a user that does not exist yet.
///
/// Expected: Ok with user stored under its Discord ID
#[tokio::test]
async fn upsert_creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "Astronaut".to_string(),
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "Astronaut");

    let found = repo.find_by_discord_id(123456789).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests that logging in again refreshes the stored display name.
///
/// Expected: Ok with the name updated in place
#[tokio::test]
async fn upsert_updates_existing_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: existing.discord_id as u64,
            name: "Renamed".to_string(),
        })
        .await?;

    assert_eq!(user.name, "Renamed");

    Ok(())
}

/// Tests looking up a user that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_discord_id(42).await?;

    assert!(found.is_none());

    Ok(())
}
