use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        guild::{ChannelDto, GuildDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{channel::ChannelService, guild::GuildAccessService},
        state::AppState,
    },
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// List the guilds the current user administers.
///
/// Each guild is annotated with whether the bot is a member and whether settings exist.
/// Sorted by name.
///
/// # Returns
/// - `200 OK` - Administered guilds
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Administered guilds", body = Vec<GuildDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session).require(&[]).await?;

    let guilds = GuildAccessService::new(&state)
        .list_admin_guilds(user.discord_id)
        .await?;

    let guilds: Vec<GuildDto> = guilds.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(guilds)))
}

/// Drop cached guild data.
///
/// Forgets the user's guild list and the bot's guild list so the next request reads them
/// from Discord, e.g. after inviting the bot.
#[utoipa::path(
    post,
    path = "/api/guilds/refresh",
    tag = GUILD_TAG,
    responses(
        (status = 204, description = "Caches dropped"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session).require(&[]).await?;

    GuildAccessService::new(&state)
        .refresh(user.discord_id)
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// List the channels of a guild webhooks can deliver into.
///
/// # Access Control
/// - `GuildAdmin` - Administrator permission in the guild
///
/// # Returns
/// - `200 OK` - Text and announcement channels sorted by position
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
/// - `502 Bad Gateway` - Discord request failed
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/channels",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild channels", body = Vec<ChannelDto>),
        (status = 400, description = "The bot cannot access the guild", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of the guild", body = ErrorDto),
        (status = 502, description = "Discord request failed", body = ErrorDto)
    ),
)]
pub async fn get_channels(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let channels = ChannelService::new(&state).list(guild_id).await?;

    let channels: Vec<ChannelDto> = channels.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(channels)))
}
