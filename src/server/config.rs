use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_WEBHOOK_AVATAR_PATH: &str = "assets/avatar.png";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Dashboard frontend origin; the OAuth callback redirects here and CORS allows it.
    pub app_url: String,
    pub bind_address: SocketAddr,
    pub webhook_avatar_path: String,
    /// Whether the session cookie is only sent over HTTPS.
    pub session_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            app_url: required("APP_URL")?.trim_end_matches('/').to_string(),
            bind_address: parse("BIND_ADDRESS", optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS))?,
            webhook_avatar_path: optional("WEBHOOK_AVATAR_PATH", DEFAULT_WEBHOOK_AVATAR_PATH),
            session_secure: parse("SESSION_SECURE", optional("SESSION_SECURE", "true"))?,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Configuration whose token endpoint refuses connections.
    pub fn for_test() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            discord_client_id: "client".to_string(),
            discord_client_secret: "secret".to_string(),
            discord_redirect_url: "http://localhost:8080/api/auth/callback".to_string(),
            discord_bot_token: "bot".to_string(),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: "http://127.0.0.1:9/oauth2/token".to_string(),
            app_url: "http://localhost:3000".to_string(),
            bind_address: ([127, 0, 0, 1], 8080).into(),
            webhook_avatar_path: DEFAULT_WEBHOOK_AVATAR_PATH.to_string(),
            session_secure: false,
        }
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse<T: std::str::FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
