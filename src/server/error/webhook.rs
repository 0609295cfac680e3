use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::discord::DiscordError};

#[derive(Error, Debug)]
pub enum WebhookError {
    /// Creating the new webhook failed; stored settings were not touched.
    #[error("Failed to create webhook: {0}")]
    Create(DiscordError),

    /// The old webhook could not be deleted after the new one was stored.
    ///
    /// The category was reset to no channel and the new webhook was deleted again.
    #[error("Failed to delete previous webhook, channel selection was reset: {0}")]
    ReplaceFailed(DiscordError),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let (status, error) = match &self {
            Self::Create(err) => (
                err.status(),
                format!("Failed to create webhook: {}", err.user_message()),
            ),
            Self::ReplaceFailed(err) => (
                StatusCode::BAD_GATEWAY,
                format!(
                    "Failed to remove the previous webhook ({}), the channel selection was reset. Please select the channel again.",
                    err.user_message()
                ),
            ),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
