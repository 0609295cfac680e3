//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the keys of its concern:
//! - `AuthSession` - The logged-in user's Discord ID
//! - `CsrfSession` - OAuth state token for the login round trip

use tower_sessions::Session;

use crate::server::{error::AppError, util::parse::parse_session_u64};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Session of the current request
    ///
    /// # Returns
    /// - `AuthSession` - Wrapper over the session's auth keys
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's Discord ID in the session.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused after login.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user who just logged in
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: u64) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the user's Discord ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    /// - `Err(AppError::InternalErr(_))` - Stored value is not a Discord ID
    pub async fn get_user_id(&self) -> Result<Option<u64>, AppError> {
        let Some(user_id_str) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let user_id = parse_session_u64(SESSION_AUTH_USER_ID, user_id_str)?;

        Ok(Some(user_id))
    }

    /// Removes all session data and deletes the session record.
    ///
    /// # Returns
    /// - `Ok(())` - Session flushed
    /// - `Err(AppError::SessionErr(_))` - Failed to delete the session from the store
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Tokens are stored when the login redirect is issued and consumed by the OAuth callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Session of the current request
    ///
    /// # Returns
    /// - `CsrfSession` - Wrapper over the session's CSRF key
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the CSRF token issued with the login redirect.
    ///
    /// # Arguments
    /// - `token` - OAuth state token to compare in the callback
    ///
    /// # Returns
    /// - `Ok(())` - Token stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token so each token can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token issued with the login redirect
    /// - `Ok(None)` - No login in progress
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
