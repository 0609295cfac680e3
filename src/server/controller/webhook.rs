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
        settings::{GuildSettingsDto, SelectChannelDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::settings::WebhookCategory,
        service::webhook::WebhookService,
        state::AppState,
        util::parse::parse_snowflake,
    },
};

/// Tag for grouping webhook endpoints in OpenAPI documentation
pub static WEBHOOK_TAG: &str = "webhook";

/// Select the channel a category delivers into.
///
/// Creates a webhook in the channel and replaces the category's previous webhook. When the
/// previous webhook cannot be deleted the category is left without a channel.
///
/// # Access Control
/// - `GuildAdmin` - Administrator permission in the guild
///
/// # Returns
/// - `200 OK` - Settings with the new channel
/// - `400 Bad Request` - Unknown category, invalid channel id, a channel outside the guild,
///   or Discord refused the webhook for a reason the server admin can fix
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
/// - `502 Bad Gateway` - Discord request failed
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/webhooks/{category}",
    tag = WEBHOOK_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("category" = String, Path, description = "`general`, `news` or `notifications`")
    ),
    request_body = SelectChannelDto,
    responses(
        (status = 200, description = "Channel selected", body = GuildSettingsDto),
        (status = 400, description = "Invalid request, channel outside the guild, or webhook refused", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of the guild", body = ErrorDto),
        (status = 502, description = "Discord request failed", body = ErrorDto)
    ),
)]
pub async fn select_channel(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, category)): Path<(u64, String)>,
    Json(payload): Json<SelectChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let category: WebhookCategory = category.parse()?;
    let channel_id = parse_snowflake(&payload.channel_id)?;

    let settings = WebhookService::new(&state)
        .select_channel(guild_id, category, channel_id)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Stop delivering a category.
///
/// # Access Control
/// - `GuildAdmin` - Administrator permission in the guild
///
/// # Returns
/// - `200 OK` - Settings with the category cleared
/// - `400 Bad Request` - Unknown category
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
/// - `404 Not Found` - The guild has no settings
#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/webhooks/{category}",
    tag = WEBHOOK_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("category" = String, Path, description = "`general`, `news` or `notifications`")
    ),
    responses(
        (status = 200, description = "Category disabled", body = GuildSettingsDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of the guild", body = ErrorDto),
        (status = 404, description = "Guild has no settings", body = ErrorDto)
    ),
)]
pub async fn disable_category(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, category)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let category: WebhookCategory = category.parse()?;

    let settings = WebhookService::new(&state)
        .disable(guild_id, category)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}
