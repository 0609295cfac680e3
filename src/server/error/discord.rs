use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serenity::http::HttpError;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// JSON error codes Discord returns that the dashboard reacts to.
///
/// See https://discord.com/developers/docs/topics/opcodes-and-status-codes#json
pub mod code {
    pub const UNKNOWN_CHANNEL: isize = 10003;
    pub const UNKNOWN_GUILD: isize = 10004;
    pub const UNKNOWN_WEBHOOK: isize = 10015;
    pub const MAX_WEBHOOKS: isize = 30007;
    pub const MISSING_ACCESS: isize = 50001;
    pub const MISSING_PERMISSIONS: isize = 50013;
}

/// Failure talking to the Discord REST API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscordError {
    /// Discord answered with a non-success status.
    #[error("Discord API returned {status} (code {code}): {message}")]
    Api {
        status: u16,
        code: isize,
        message: String,
    },

    /// The request never produced a Discord response (network, TLS, decoding).
    #[error("Discord request failed: {0}")]
    Request(String),

    /// Discord created a webhook but did not return its token.
    #[error("Discord did not return a token for webhook {0}")]
    MissingWebhookToken(u64),
}

impl DiscordError {
    /// Discord JSON error code, if Discord answered at all.
    pub fn code(&self) -> Option<isize> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the referenced resource does not exist (anymore).
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api { status, code, .. } => *status == 404 || *code == code::UNKNOWN_WEBHOOK,
            _ => false,
        }
    }

    /// Whether the error shows that the bot is no longer in, or cannot see, the guild.
    pub fn indicates_lost_guild_access(&self) -> bool {
        matches!(
            self.code(),
            Some(code::MISSING_ACCESS) | Some(code::UNKNOWN_GUILD)
        )
    }

    /// User-facing explanation of the failure.
    pub fn user_message(&self) -> &'static str {
        match self.code() {
            Some(code::MISSING_PERMISSIONS) => {
                "The bot is missing the Manage Webhooks permission in that channel"
            }
            Some(code::MISSING_ACCESS) => "The bot cannot access that channel",
            Some(code::UNKNOWN_CHANNEL) => "That channel no longer exists",
            Some(code::UNKNOWN_GUILD) => "The bot is no longer a member of this server",
            Some(code::MAX_WEBHOOKS) => {
                "That channel has reached the maximum number of webhooks"
            }
            _ => "Discord rejected the request, please try again later",
        }
    }

    /// HTTP status reported to the dashboard client.
    ///
    /// Failures the server admin can fix (permissions, deleted channels, limits) are 400,
    /// everything else is a bad gateway.
    pub fn status(&self) -> StatusCode {
        match self.code() {
            Some(code::MISSING_PERMISSIONS)
            | Some(code::MISSING_ACCESS)
            | Some(code::UNKNOWN_CHANNEL)
            | Some(code::UNKNOWN_GUILD)
            | Some(code::MAX_WEBHOOKS) => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<serenity::Error> for DiscordError {
    fn from(err: serenity::Error) -> Self {
        match err {
            serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => Self::Api {
                status: response.status_code.as_u16(),
                code: response.error.code,
                message: response.error.message,
            },
            other => Self::Request(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for DiscordError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Api {
                status: status.as_u16(),
                code: 0,
                message: err.to_string(),
            },
            None => Self::Request(err.to_string()),
        }
    }
}

impl IntoResponse for DiscordError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            self.status(),
            Json(ErrorDto {
                error: self.user_message().to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, code: isize) -> DiscordError {
        DiscordError::Api {
            status,
            code,
            message: "error".to_string(),
        }
    }

    #[test]
    fn unknown_webhook_counts_as_not_found() {
        assert!(api_error(404, 0).is_not_found());
        assert!(api_error(400, code::UNKNOWN_WEBHOOK).is_not_found());
        assert!(!api_error(403, code::MISSING_PERMISSIONS).is_not_found());
        assert!(!DiscordError::Request("timeout".to_string()).is_not_found());
    }

    #[test]
    fn missing_access_indicates_lost_guild() {
        assert!(api_error(403, code::MISSING_ACCESS).indicates_lost_guild_access());
        assert!(api_error(404, code::UNKNOWN_GUILD).indicates_lost_guild_access());
        assert!(!api_error(403, code::MISSING_PERMISSIONS).indicates_lost_guild_access());
    }

    #[test]
    fn missing_permissions_is_client_error_with_specific_message() {
        let err = api_error(403, code::MISSING_PERMISSIONS);

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.user_message().contains("Manage Webhooks"));
    }

    #[test]
    fn unexpected_failures_are_bad_gateway() {
        assert_eq!(api_error(500, 0).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            DiscordError::Request("reset".to_string()).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
