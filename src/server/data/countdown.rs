//! Notification countdown repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{data::guild_settings::insert_default_if_missing, model::countdown::Countdown};

pub struct CountdownRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountdownRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a guild's countdowns ordered by lead time, shortest first.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<Countdown>, DbErr> {
        let entities = entity::prelude::NotificationCountdown::find()
            .filter(entity::notification_countdown::Column::GuildId.eq(guild_id as i64))
            .order_by_asc(entity::notification_countdown::Column::Minutes)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Countdown::from_entity).collect())
    }

    pub async fn count_by_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        entity::prelude::NotificationCountdown::find()
            .filter(entity::notification_countdown::Column::GuildId.eq(guild_id as i64))
            .count(self.db)
            .await
    }

    pub async fn exists(&self, guild_id: u64, minutes: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::NotificationCountdown::find_by_id((guild_id as i64, minutes))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Stores a countdown, creating the guild's settings row first if needed.
    ///
    /// # Returns
    /// - `Ok(Countdown)` - The stored countdown
    /// - `Err(DbErr)` - Database error, including a unique violation for duplicates
    pub async fn create(&self, guild_id: u64, minutes: i32) -> Result<Countdown, DbErr> {
        insert_default_if_missing(self.db, guild_id).await?;

        let entity = entity::notification_countdown::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            minutes: ActiveValue::Set(minutes),
        }
        .insert(self.db)
        .await?;

        Ok(Countdown::from_entity(entity))
    }

    /// Deletes a countdown.
    ///
    /// # Returns
    /// - `Ok(true)` - The countdown existed and was deleted
    /// - `Ok(false)` - No such countdown
    pub async fn delete(&self, guild_id: u64, minutes: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::NotificationCountdown::delete_by_id((guild_id as i64, minutes))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
