//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique id shaped like a Discord snowflake column value.
pub fn next_snowflake() -> i64 {
    100_000_000_000_000_000 + next_id() as i64
}

/// Creates a settings row together with two agencies and two news sites.
///
/// Convenience for filter tests that need reference rows to select from.
///
/// # Returns
/// - `Ok((guild, agencies, news_sites))` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_reference_data(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::enabled_guild::Model,
        Vec<entity::ll2_agency::Model>,
        Vec<entity::news_site::Model>,
    ),
    DbErr,
> {
    let guild = crate::factory::enabled_guild::create_enabled_guild(db).await?;

    let agencies = vec![
        crate::factory::reference::create_agency(db, "SpaceX").await?,
        crate::factory::reference::create_agency(db, "Rocket Lab").await?,
    ];
    let news_sites = vec![
        crate::factory::reference::create_news_site(db, "Spaceflight Now").await?,
        crate::factory::reference::create_news_site(db, "NASASpaceflight").await?,
    ];

    Ok((guild, agencies, news_sites))
}
