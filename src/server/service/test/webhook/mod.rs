use test_utils::serenity::create_test_channel;

use super::*;
use crate::server::{
    model::settings::WebhookCategory,
    service::{guild::GuildAccessService, webhook::WebhookService},
};

mod disable;
mod select_channel;

const OLD_URL: &str = "https://discord.com/api/webhooks/1/old-token";

/// Fake Discord whose guilds contain a single text channel 42.
fn discord_with_channel() -> FakeDiscord {
    FakeDiscord::with_channels(vec![create_test_channel(42, 1, "launches", 0, 0)])
}

/// Settings row whose general category delivers into channel 5 through webhook 1.
async fn guild_with_general_webhook(db: &DatabaseConnection) -> Result<u64, AppError> {
    let guild = factory::enabled_guild::EnabledGuildFactory::new(db)
        .general_webhook(5, OLD_URL)
        .build()
        .await?;

    Ok(guild.guild_id as u64)
}

async fn stored_general(db: &DatabaseConnection, guild_id: u64) -> (Option<i64>, Option<String>) {
    let row = entity::prelude::EnabledGuild::find_by_id(guild_id as i64)
        .one(db)
        .await
        .unwrap()
        .unwrap();

    (row.channel_id, row.webhook_url)
}
