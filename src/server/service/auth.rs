//! OAuth2 login with Discord

use oauth2::{AuthorizationCode, CsrfToken, Scope};
use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    service::{account::AccountService, discord::DiscordApi},
    state::{AppState, OAuth2Client},
};

/// Scopes needed to identify the user and list their guilds with permissions.
const OAUTH_SCOPES: [&str; 2] = ["identify", "guilds"];

pub struct DiscordAuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub discord: &'a dyn DiscordApi,
    accounts: AccountService<'a>,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            db: &state.db,
            http_client: &state.http_client,
            oauth_client: &state.oauth_client,
            discord: state.discord.as_ref(),
            accounts: AccountService::new(state),
        }
    }

    /// Builds the Discord authorization URL together with its CSRF state.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(OAUTH_SCOPES.map(|scope| Scope::new(scope.to_string())))
            .url();

        (authorize_url, csrf_state)
    }

    /// Completes a login.
    ///
    /// Exchanges the authorization code, fetches the Discord user, and stores both the user
    /// and the issued tokens.
    ///
    /// # Arguments
    /// - `authorization_code` - Code Discord passed to the callback
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::TokenExchange)` - Discord did not accept the code
    /// - `Err(AppError::DiscordErr)` - Fetching the user failed
    /// - `Err(AppError::DbErr)` - Storing the user or tokens failed
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchange(err.to_string()))?;

        let access_token = oauth2::TokenResponse::access_token(&token).secret().clone();
        let discord_user = self.discord.current_user(&access_token).await?;

        let user = user_repo
            .upsert(UpsertUserParam {
                discord_id: discord_user.id.get(),
                name: discord_user
                    .global_name
                    .clone()
                    .unwrap_or_else(|| discord_user.name.clone()),
            })
            .await?;
        self.accounts.store_tokens(user.discord_id, &token).await?;

        tracing::info!("User {} ({}) logged in", user.name, user.discord_id);

        Ok(user)
    }
}
