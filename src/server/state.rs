//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `reqwest::Client` and `OAuth2Client` are designed to be cloned
//! - `Arc<dyn DiscordApi>` is a reference-counted pointer
//! - The caches share their storage between clones

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::service::{
    cache::TtlCache,
    discord::DiscordApi,
    filter::{ReferenceCache, REFERENCE_TTL},
    guild::GuildCache,
};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Database shared with the LiveLaunch bot.
    pub db: DatabaseConnection,

    /// HTTP client for OAuth token requests and user-token Discord calls.
    ///
    /// Configured without redirects to prevent SSRF.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Discord REST access, replaced by a fake in tests.
    pub discord: Arc<dyn DiscordApi>,

    pub guild_cache: GuildCache,

    pub reference_cache: ReferenceCache,

    /// Dashboard frontend URL the OAuth callback redirects to.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord: Arc<dyn DiscordApi>,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord,
            guild_cache: GuildCache::default(),
            reference_cache: TtlCache::new(REFERENCE_TTL),
            app_url,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State over a test database with Discord replaced by `discord`.
    pub fn for_test(
        db: DatabaseConnection,
        discord: Arc<crate::server::service::discord::fake::FakeDiscord>,
    ) -> Self {
        let config = crate::server::config::Config::for_test();

        Self::new(
            db,
            reqwest::Client::new(),
            crate::server::startup::setup_oauth_client(&config)
                .expect("test OAuth configuration is valid"),
            discord,
            config.app_url,
        )
    }
}
