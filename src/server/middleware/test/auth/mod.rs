use std::sync::Arc;

use test_utils::{builder::TestBuilder, factory, serenity::create_test_guild_info};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    service::discord::fake::FakeDiscord,
    state::AppState,
};

mod require;
