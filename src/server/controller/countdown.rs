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
        countdown::{CountdownDto, CreateCountdownDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::countdown::CreateCountdownParam,
        service::countdown::CountdownService,
        state::AppState,
    },
};

/// Tag for grouping countdown endpoints in OpenAPI documentation
pub static COUNTDOWN_TAG: &str = "countdown";

/// List a guild's notification countdowns, shortest first.
///
/// # Access Control
/// - `GuildAdmin` - Administrator permission in the guild
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/countdowns",
    tag = COUNTDOWN_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Countdowns", body = Vec<CountdownDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countdowns(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let countdowns = CountdownService::new(&state.db).list(guild_id).await?;

    let countdowns: Vec<CountdownDto> = countdowns.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(countdowns)))
}

/// Add a notification countdown.
///
/// # Access Control
/// - `GuildAdmin` - Administrator permission in the guild
///
/// # Returns
/// - `201 Created` - The stored countdown
/// - `400 Bad Request` - Invalid components or the guild reached the countdown limit
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an administrator of the guild
/// - `409 Conflict` - A countdown with the same lead time exists
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/countdowns",
    tag = COUNTDOWN_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = CreateCountdownDto,
    responses(
        (status = 201, description = "Countdown added", body = CountdownDto),
        (status = 400, description = "Invalid countdown or limit reached", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of the guild", body = ErrorDto),
        (status = 409, description = "Countdown already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_countdown(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateCountdownDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let countdown = CountdownService::new(&state.db)
        .create(guild_id, CreateCountdownParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(countdown.into_dto())))
}

/// Remove a notification countdown by its total minutes.
///
/// # Access Control
/// - `GuildAdmin` - Administrator permission in the guild
#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/countdowns/{minutes}",
    tag = COUNTDOWN_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("minutes" = i32, Path, description = "Total minutes before launch")
    ),
    responses(
        (status = 204, description = "Countdown removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator of the guild", body = ErrorDto),
        (status = 404, description = "No such countdown", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_countdown(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, minutes)): Path<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &session)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    CountdownService::new(&state.db)
        .delete(guild_id, minutes)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
