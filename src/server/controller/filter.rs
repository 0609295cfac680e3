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
        filter::{GuildFilterDto, ReferenceItemDto, UpdateFilterDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::filter::{FilterKind, ReplaceFilterParam},
        service::filter::FilterService,
        state::AppState,
    },
};

/// Tag for grouping filter endpoints in OpenAPI documentation
pub static FILTER_TAG: &str = "filter";

/// List every agency or news site that can be filtered.
#[utoipa::path(
    get,
    path = "/api/filters/{kind}",
    tag = FILTER_TAG,
    params(
        ("kind" = String, Path, description = "`agencies` or `news-sites`")
    ),
    responses(
        (status = 200, description = "Reference items ordered by name", body = Vec<ReferenceItemDto>),
        (status = 400, description = "Unknown filter kind", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reference_items(
    State(state): State<AppState>,
    session: Session,
    Path(kind): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &session).require(&[]).await?;

    let kind: FilterKind = kind.parse()?;
    let items = FilterService::new(&state).reference_items(kind).await?;

    let items: Vec<ReferenceItemDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// Get a guild's filter.
///
/// Every reference item is listed with whether the guild selected it and whether it ends
/// up shown under the guild's mode.
///
/// # Access Control
/// - `GuildAdmin` - Administrator permission in the guild
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/filters/{kind}",
    tag = FILTER_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("kind" = String, Path, description = "`agencies` or `news-sites`")
    ),
    responses(
        (status = 200, description = "Guild filter", body = GuildFilterDto),
        (status = 400, description = "Unknown filter kind", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_filter(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, kind)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let kind: FilterKind = kind.parse()?;
    let filter = FilterService::new(&state).get(guild_id, kind).await?;

    Ok((StatusCode::OK, Json(filter.into_dto())))
}

/// Replace a guild's filter.
///
/// The mode is stored and the selection replaced as a whole; items not listed are
/// deselected.
///
/// # Access Control
/// - `GuildAdmin` - Administrator permission in the guild
///
/// # Returns
/// - `200 OK` - The stored filter
/// - `400 Bad Request` - Unknown filter kind or item ids
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/filters/{kind}",
    tag = FILTER_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("kind" = String, Path, description = "`agencies` or `news-sites`")
    ),
    request_body = UpdateFilterDto,
    responses(
        (status = 200, description = "Filter replaced", body = GuildFilterDto),
        (status = 400, description = "Unknown filter kind or items", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_filter(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, kind)): Path<(u64, String)>,
    Json(payload): Json<UpdateFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let kind: FilterKind = kind.parse()?;
    let filter = FilterService::new(&state)
        .replace(guild_id, kind, ReplaceFilterParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(filter.into_dto())))
}
