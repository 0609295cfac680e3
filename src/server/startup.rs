use std::sync::Arc;

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use serenity::{all::CreateAttachment, http::Http};
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use url::Url;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::discord::DiscordClient,
    state::OAuth2Client,
};

const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Migrations only create missing tables, so starting against a database the bot already
/// populated leaves its data untouched.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by a `tower_sessions` table in the same database.
///
/// Sessions expire after seven days without a request.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await.map_err(|e| {
        AppError::InternalError(format!("Failed to migrate session store: {}", e))
    })?;

    let session = SessionManagerLayer::new(store)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )));

    Ok(session)
}

/// Builds the HTTP client for OAuth and Discord requests.
///
/// Redirects are disabled to prevent SSRF through redirecting endpoints.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Discord OAuth2 client.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization, token, and redirect URLs set
/// - `Err(ConfigError::InvalidEnvVar)` - One of the URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str, value: &str| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    };

    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|_| invalid("discord_auth_url", &config.discord_auth_url))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|_| invalid("discord_token_url", &config.discord_token_url))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(|_| invalid("DISCORD_REDIRECT_URL", &config.discord_redirect_url))?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Allows the dashboard frontend at `APP_URL` to call the API with its session cookie.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer allowing the frontend's origin with credentials
/// - `Err(ConfigError::InvalidEnvVar)` - `APP_URL` is not an absolute URL
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let invalid = || ConfigError::InvalidEnvVar {
        name: "APP_URL".to_string(),
        value: config.app_url.clone(),
    };

    let origin = Url::parse(&config.app_url)
        .map_err(|_| invalid())?
        .origin()
        .ascii_serialization();
    let origin = HeaderValue::from_str(&origin).map_err(|_| invalid())?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(cors)
}

/// Builds the Discord client using the bot token and the webhook avatar.
pub async fn setup_discord_client(
    config: &Config,
    http_client: reqwest::Client,
) -> DiscordClient {
    let bot_http = Arc::new(Http::new(&config.discord_bot_token));
    let avatar = load_webhook_avatar(&config.webhook_avatar_path).await;

    DiscordClient::new(http_client, bot_http, avatar)
}

/// Loads the image used as avatar for created webhooks.
///
/// A missing or unreadable file is logged and webhooks are created without an avatar.
async fn load_webhook_avatar(path: &str) -> Option<CreateAttachment> {
    match CreateAttachment::path(path).await {
        Ok(avatar) => {
            tracing::info!("Loaded webhook avatar from {}", path);
            Some(avatar)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load webhook avatar from {}, webhooks will use Discord's default: {}",
                path,
                e
            );
            None
        }
    }
}
