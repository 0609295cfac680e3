use std::sync::atomic::Ordering;

use super::*;
use crate::server::service::guild::GuildAccessService;

/// Logged-in user with valid tokens.
async fn user_with_account(db: &DatabaseConnection) -> Result<u64, AppError> {
    let user = factory::create_user(db).await?;
    factory::create_account(db, user.discord_id).await?;
    Ok(user.discord_id as u64)
}

/// Tests the guild listing.
///
/// Expected: only administered guilds, sorted by name, flagged with bot membership and
/// settings presence
#[tokio::test]
async fn lists_admin_guilds_with_flags() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user_id = user_with_account(db).await?;

    factory::enabled_guild::EnabledGuildFactory::new(db)
        .guild_id(20)
        .build()
        .await?;

    let discord = FakeDiscord::with_user_guilds(vec![
        create_test_guild_info(10, "zulu", ADMINISTRATOR),
        create_test_guild_info(20, "Alpha", ADMINISTRATOR | 0x20),
        create_test_guild_info(30, "Member only", 0x400),
    ]);
    *discord.bot_guilds.lock().unwrap() = Ok(vec![create_test_guild_info(20, "Alpha", 0)]);
    let (state, _) = state_with(db, discord);

    let guilds = GuildAccessService::new(&state)
        .list_admin_guilds(user_id)
        .await?;

    assert_eq!(guilds.len(), 2);
    assert_eq!(guilds[0].guild.id, 20);
    assert!(guilds[0].bot_in_guild);
    assert!(guilds[0].enabled);
    assert_eq!(guilds[1].guild.id, 10);
    assert!(!guilds[1].bot_in_guild);
    assert!(!guilds[1].enabled);

    Ok(())
}

/// Tests that guild lists are cached per user until invalidated.
///
/// Expected: one Discord call for repeated checks, another after invalidation
#[tokio::test]
async fn caches_user_guilds_until_invalidated() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user_id = user_with_account(db).await?;

    let (state, discord) = state_with(
        db,
        FakeDiscord::with_user_guilds(vec![create_test_guild_info(10, "A", ADMINISTRATOR)]),
    );
    let service = GuildAccessService::new(&state);

    assert!(service.admin_guild(user_id, 10).await?.is_some());
    assert!(service.admin_guild(user_id, 10).await?.is_some());
    assert_eq!(discord.user_guild_calls.load(Ordering::SeqCst), 1);

    service.refresh(user_id).await;
    assert!(service.admin_guild(user_id, 10).await?.is_some());
    assert_eq!(discord.user_guild_calls.load(Ordering::SeqCst), 2);

    Ok(())
}

/// Tests that a failed guild fetch denies access and is cached briefly.
///
/// Expected: no admin guilds, and no second Discord call while the failure is cached
#[tokio::test]
async fn upstream_failure_fails_closed() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user_id = user_with_account(db).await?;

    let discord = FakeDiscord::default();
    *discord.user_guilds.lock().unwrap() = Err(api_error(500, 0));
    let (state, discord) = state_with(db, discord);
    let service = GuildAccessService::new(&state);

    assert!(service.admin_guild(user_id, 10).await?.is_none());

    *discord.user_guilds.lock().unwrap() =
        Ok(vec![create_test_guild_info(10, "A", ADMINISTRATOR)]);
    assert!(service.admin_guild(user_id, 10).await?.is_none());
    assert_eq!(discord.user_guild_calls.load(Ordering::SeqCst), 1);

    Ok(())
}

/// Tests a user whose Discord session cannot be refreshed.
///
/// Expected: no admin guilds and no Discord call
#[tokio::test]
async fn expired_session_fails_closed() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let (state, discord) = state_with(
        db,
        FakeDiscord::with_user_guilds(vec![create_test_guild_info(10, "A", ADMINISTRATOR)]),
    );

    let guilds = GuildAccessService::new(&state)
        .user_admin_guilds(user.discord_id as u64)
        .await?;

    assert!(guilds.is_empty());
    assert_eq!(discord.user_guild_calls.load(Ordering::SeqCst), 0);

    Ok(())
}

/// Tests the bot guild list when Discord fails.
///
/// Expected: every guild reported without the bot
#[tokio::test]
async fn bot_guild_failure_reports_bot_absent() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user_id = user_with_account(db).await?;

    let discord = FakeDiscord::with_user_guilds(vec![create_test_guild_info(
        10,
        "A",
        ADMINISTRATOR,
    )]);
    *discord.bot_guilds.lock().unwrap() = Err(api_error(502, 0));
    let (state, _) = state_with(db, discord);

    let guilds = GuildAccessService::new(&state)
        .list_admin_guilds(user_id)
        .await?;

    assert_eq!(guilds.len(), 1);
    assert!(!guilds[0].bot_in_guild);

    Ok(())
}
