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
        settings::{GuildSettingsDto, UpdateSettingsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::settings::UpdateSettingsParam,
        service::settings::GuildSettingsService,
        state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Get a guild's settings.
///
/// # Access Control
/// - `GuildAdmin` - Administrator permission in the guild
///
/// # Returns
/// - `200 OK` - Stored settings
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
/// - `404 Not Found` - The guild never enabled LiveLaunch
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/settings",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild settings", body = GuildSettingsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of the guild", body = ErrorDto),
        (status = 404, description = "Guild has no settings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let settings = GuildSettingsService::new(&state.db).get(guild_id).await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Update some of a guild's settings.
///
/// Only fields present in the body are written. The settings row is created on the first
/// update.
///
/// # Access Control
/// - `GuildAdmin` - Administrator permission in the guild
///
/// # Returns
/// - `200 OK` - Settings after the update
/// - `400 Bad Request` - A value is out of range; nothing was written
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}/settings",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Updated settings", body = GuildSettingsDto),
        (status = 400, description = "Invalid value", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of the guild", body = ErrorDto),
        (status = 404, description = "Empty update for a guild without settings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<UpdateSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let param = UpdateSettingsParam::from(payload);
    let settings = GuildSettingsService::new(&state.db)
        .update(guild_id, param)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}
