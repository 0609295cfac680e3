use super::*;

const ADMINISTRATOR: u64 = 0x8;
const MANAGE_GUILD: u64 = 0x20;

/// Tests a request without a logged-in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::for_test(db.clone(), Arc::new(FakeDiscord::default()));

    let result = AuthGuard::new(&state, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session referencing a user that is not stored.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::for_test(db.clone(), Arc::new(FakeDiscord::default()));

    AuthSession::new(session).set_user_id(404).await?;
    let result = AuthGuard::new(&state, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests an administrator of the requested guild.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_guild_administrator() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    factory::create_account(db, user.discord_id).await?;
    let discord = FakeDiscord::with_user_guilds(vec![create_test_guild_info(
        10,
        "Launch Club",
        ADMINISTRATOR,
    )]);
    let state = AppState::for_test(db.clone(), Arc::new(discord));

    AuthSession::new(session)
        .set_user_id(user.discord_id as u64)
        .await?;
    let result = AuthGuard::new(&state, session)
        .require(&[Permission::GuildAdmin(10)])
        .await?;

    assert_eq!(result.discord_id, user.discord_id as u64);

    Ok(())
}

/// Tests a guild member without the Administrator permission.
///
/// Manage Server alone is not enough.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_member_without_administrator() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    factory::create_account(db, user.discord_id).await?;
    let discord = FakeDiscord::with_user_guilds(vec![create_test_guild_info(
        10,
        "Launch Club",
        MANAGE_GUILD,
    )]);
    let state = AppState::for_test(db.clone(), Arc::new(discord));

    AuthSession::new(session)
        .set_user_id(user.discord_id as u64)
        .await?;
    let result = AuthGuard::new(&state, session)
        .require(&[Permission::GuildAdmin(10)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a guild the user is not a member of.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_foreign_guild() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    factory::create_account(db, user.discord_id).await?;
    let discord = FakeDiscord::with_user_guilds(vec![create_test_guild_info(
        10,
        "Launch Club",
        ADMINISTRATOR,
    )]);
    let state = AppState::for_test(db.clone(), Arc::new(discord));

    AuthSession::new(session)
        .set_user_id(user.discord_id as u64)
        .await?;
    let result = AuthGuard::new(&state, session)
        .require(&[Permission::GuildAdmin(11)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a Discord outage denies access instead of failing open.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_when_discord_fails() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    factory::create_account(db, user.discord_id).await?;
    let discord = FakeDiscord::default();
    *discord.user_guilds.lock().unwrap() = Err(
        crate::server::error::discord::DiscordError::Request("timed out".to_string()),
    );
    let state = AppState::for_test(db.clone(), Arc::new(discord));

    AuthSession::new(session)
        .set_user_id(user.discord_id as u64)
        .await?;
    let result = AuthGuard::new(&state, session)
        .require(&[Permission::GuildAdmin(10)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
