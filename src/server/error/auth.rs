use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session; the caller is not logged in.
    #[error("No user ID found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists in the database.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(u64),

    /// The stored OAuth token expired and cannot be refreshed.
    ///
    /// Happens when no account row exists, when no refresh token was issued, or when Discord
    /// rejects the refresh grant. The user has to log in again.
    #[error("Discord session of user {0} expired and could not be refreshed")]
    SessionExpired(u64),

    /// The user is not an administrator of the requested guild.
    ///
    /// The second field carries the reason for server-side logs only; the client always
    /// receives the same generic message.
    #[error("User {0} denied access: {1}")]
    AccessDenied(u64, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code or refresh token with Discord failed.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `SessionExpired` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with a generic message
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `TokenExchange` → 500 Internal Server Error
///
/// The detailed error is logged at debug level (error level for token exchange failures)
/// while the client-facing message stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "You are not logged in")
            }
            Self::SessionExpired(_) => (
                StatusCode::UNAUTHORIZED,
                "Your Discord session expired, please log in again",
            ),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to manage this server",
            ),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::TokenExchange(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
