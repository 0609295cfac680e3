use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::guild_settings::GuildSettingsRepository,
    model::{
        filter::FilterMode,
        settings::{UpdateSettingsParam, WebhookCategory, WebhookTarget},
    },
};

mod enabled_among;
mod find;
mod set_webhook;
mod update;
