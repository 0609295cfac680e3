use std::sync::Arc;

use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{
    builder::TestBuilder, context::TestContext, factory, serenity::create_test_guild_info,
};

use crate::server::{
    error::{
        auth::AuthError, discord::DiscordError, settings::SettingsError, webhook::WebhookError,
        AppError,
    },
    service::discord::fake::FakeDiscord,
    state::AppState,
};

mod guild;
mod webhook;

const ADMINISTRATOR: u64 = 0x8;

/// Context with every table the services touch.
async fn setup() -> TestContext {
    TestBuilder::new()
        .with_user_tables()
        .with_settings_tables()
        .build()
        .await
        .unwrap()
}

/// State over `db` together with a handle to its fake Discord.
fn state_with(db: &DatabaseConnection, discord: FakeDiscord) -> (AppState, Arc<FakeDiscord>) {
    let discord = Arc::new(discord);
    (AppState::for_test(db.clone(), discord.clone()), discord)
}

fn api_error(status: u16, code: isize) -> DiscordError {
    DiscordError::Api {
        status,
        code,
        message: "error".to_string(),
    }
}
