//! Account factory for creating stored OAuth token sets.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts.
///
/// Defaults to a token valid for one hour with a refresh token present.
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    access_token: String,
    refresh_token: Option<String>,
    expires_at: DateTime<Utc>,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory for the given user.
    pub fn new(db: &'a DatabaseConnection, user_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            access_token: format!("access_{}", id),
            refresh_token: Some(format!("refresh_{}", id)),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    pub fn refresh_token(mut self, refresh_token: Option<String>) -> Self {
        self.refresh_token = refresh_token;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the account entity into the database.
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            access_token: ActiveValue::Set(self.access_token),
            refresh_token: ActiveValue::Set(self.refresh_token),
            expires_at: ActiveValue::Set(self.expires_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unexpired account for the given user.
pub async fn create_account(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db, user_id).build().await
}
