use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Validation failures for settings, filters, and countdowns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Server {0} has not enabled LiveLaunch yet")]
    GuildNotEnabled(u64),

    #[error("Scheduled events must be between 0 and 50, got {0}")]
    ScheduledEventsOutOfRange(i32),

    #[error("'{0}' is not a valid Discord ID")]
    InvalidSnowflake(String),

    #[error("That channel does not belong to this server")]
    ChannelNotInGuild { channel_id: u64, guild_id: u64 },

    #[error("Unknown webhook category '{0}'")]
    UnknownWebhookCategory(String),

    #[error("Unknown filter '{0}'")]
    UnknownFilterKind(String),

    #[error("Unknown filter items: {0:?}")]
    UnknownFilterItems(Vec<i32>),

    #[error("A countdown needs at least one non-zero component")]
    CountdownEmpty,

    #[error("Countdown {field} must be between 0 and {max}, got {value}")]
    CountdownOutOfRange {
        field: &'static str,
        value: i32,
        max: i32,
    },

    #[error("A server can have at most {0} countdowns")]
    CountdownLimitReached(u64),

    #[error("A countdown of {0} minutes already exists")]
    DuplicateCountdown(i32),

    #[error("No countdown of {0} minutes exists")]
    CountdownNotFound(i32),
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::GuildNotEnabled(_) | Self::CountdownNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateCountdown(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
