use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    service::guild::GuildAccessService,
    state::AppState,
};

pub enum Permission {
    /// Administrator permission in the given guild.
    GuildAdmin(u64),
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, session: &'a Session) -> Self {
        Self { state, session }
    }

    /// Resolves the logged-in user and checks each permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged in and holding every permission
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(&self.state.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_discord_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::GuildAdmin(guild_id) => {
                    let guild = GuildAccessService::new(self.state)
                        .admin_guild(user_id, *guild_id)
                        .await?;

                    if guild.is_none() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User is not an administrator of guild {}", guild_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
