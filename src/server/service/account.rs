//! Discord OAuth token management.

use chrono::Duration;
use oauth2::{basic::BasicTokenResponse, RefreshToken, RequestTokenError};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    model::account::{Account, UpsertAccountParam},
    state::{AppState, OAuth2Client},
};

/// Tokens expiring within this many seconds are refreshed before use.
const REFRESH_MARGIN_SECONDS: i64 = 60;

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> AccountService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            db: &state.db,
            http_client: &state.http_client,
            oauth_client: &state.oauth_client,
        }
    }

    /// Stores the tokens issued for a user.
    pub async fn store_tokens(
        &self,
        user_id: u64,
        token: &BasicTokenResponse,
    ) -> Result<Account, AppError> {
        let account_repo = AccountRepository::new(self.db);

        let account = account_repo
            .upsert(UpsertAccountParam::from_token(user_id, token))
            .await?;

        Ok(account)
    }

    /// Returns a usable access token for the user.
    ///
    /// The stored token is returned as is unless it expires within the next minute, in which
    /// case it is refreshed through the OAuth2 refresh grant and the new token set is stored.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(String)` - Access token valid for at least another minute
    /// - `Err(AuthError::SessionExpired)` - No account, no refresh token, or Discord rejected
    ///   the refresh token
    /// - `Err(AuthError::TokenExchange)` - The refresh request failed for another reason
    /// - `Err(AppError::DbErr)` - Database error reading or storing tokens
    pub async fn access_token(&self, user_id: u64) -> Result<String, AppError> {
        let account_repo = AccountRepository::new(self.db);

        let Some(account) = account_repo.find_by_user_id(user_id).await? else {
            return Err(AuthError::SessionExpired(user_id).into());
        };

        if !account.expires_within(Duration::seconds(REFRESH_MARGIN_SECONDS)) {
            return Ok(account.access_token);
        }

        let Some(refresh_token) = account.refresh_token else {
            return Err(AuthError::SessionExpired(user_id).into());
        };

        let token = self
            .oauth_client
            .exchange_refresh_token(&RefreshToken::new(refresh_token))
            .request_async(self.http_client)
            .await
            .map_err(|err| match err {
                RequestTokenError::ServerResponse(response) => {
                    tracing::debug!(
                        "Discord rejected refresh token of user {}: {}",
                        user_id,
                        response
                    );
                    AuthError::SessionExpired(user_id)
                }
                other => AuthError::TokenExchange(other.to_string()),
            })?;

        let account = self.store_tokens(user_id, &token).await?;
        tracing::debug!("Refreshed Discord access token of user {}", user_id);

        Ok(account.access_token)
    }
}
