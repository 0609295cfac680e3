//! Storage for users' Discord OAuth tokens.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::account::{Account, UpsertAccountParam};

pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a token set, replacing the previous one of the user.
    ///
    /// The refresh token column is only overwritten when the param carries a new one;
    /// Discord may omit it from a refresh response and the old one stays valid.
    ///
    /// # Returns
    /// - `Ok(Account)` - The stored token set
    /// - `Err(DbErr)` - Database error, e.g. the user row does not exist
    pub async fn upsert(&self, param: UpsertAccountParam) -> Result<Account, DbErr> {
        let mut update_columns = vec![
            entity::account::Column::AccessToken,
            entity::account::Column::ExpiresAt,
        ];
        if param.refresh_token.is_some() {
            update_columns.push(entity::account::Column::RefreshToken);
        }

        let entity = entity::prelude::Account::insert(entity::account::ActiveModel {
            user_id: ActiveValue::Set(param.user_id as i64),
            access_token: ActiveValue::Set(param.access_token),
            refresh_token: ActiveValue::Set(param.refresh_token),
            expires_at: ActiveValue::Set(param.expires_at),
        })
        .on_conflict(
            OnConflict::column(entity::account::Column::UserId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }

    /// Finds the token set of a user.
    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find_by_id(user_id as i64)
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }
}
