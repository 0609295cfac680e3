use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, countdown, filter, guild, settings, webhook},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LiveLaunch Dashboard API",
        description = "Per-guild settings for the LiveLaunch Discord bot"
    ),
    tags(
        (name = "auth", description = "Discord login and session"),
        (name = "guild", description = "Administered guilds and their channels"),
        (name = "settings", description = "Scheduled events and notification toggles"),
        (name = "webhook", description = "Delivery channels per category"),
        (name = "filter", description = "Agency and news site filters"),
        (name = "countdown", description = "Notification countdowns")
    )
)]
struct ApiDoc;

/// Builds the API routes together with the Swagger UI serving their OpenAPI document.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(guild::get_guilds))
        .routes(routes!(guild::refresh_guilds))
        .routes(routes!(guild::get_channels))
        .routes(routes!(settings::get_settings, settings::update_settings))
        .routes(routes!(webhook::select_channel, webhook::disable_category))
        .routes(routes!(filter::get_reference_items))
        .routes(routes!(filter::get_filter, filter::replace_filter))
        .routes(routes!(countdown::get_countdowns, countdown::create_countdown))
        .routes(routes!(countdown::delete_countdown))
}
