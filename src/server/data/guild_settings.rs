//! Guild settings repository.
//!
//! Reads and writes the `enabled_guilds` row shared with the bot. Rows are created on the
//! first write with the bot's defaults and are never deleted by the dashboard.

use std::collections::HashSet;

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QuerySelect,
};

use entity::enabled_guild::Column;

use crate::server::model::settings::{
    GuildSettings, UpdateSettingsParam, WebhookCategory, WebhookTarget,
};

/// Inserts a settings row with default values unless the guild already has one.
///
/// Generic over the connection so it can run inside the filter replacement transaction.
pub(crate) async fn insert_default_if_missing<C: ConnectionTrait>(
    conn: &C,
    guild_id: u64,
) -> Result<(), DbErr> {
    entity::prelude::EnabledGuild::insert(default_settings(guild_id))
        .on_conflict(OnConflict::column(Column::GuildId).do_nothing().to_owned())
        .exec_without_returning(conn)
        .await?;

    Ok(())
}

fn default_settings(guild_id: u64) -> entity::enabled_guild::ActiveModel {
    entity::enabled_guild::ActiveModel {
        guild_id: ActiveValue::Set(guild_id as i64),
        channel_id: ActiveValue::Set(None),
        webhook_url: ActiveValue::Set(None),
        scheduled_events: ActiveValue::Set(0),
        se_launch: ActiveValue::Set(1),
        se_event: ActiveValue::Set(1),
        se_no_url: ActiveValue::Set(0),
        agencies_include_exclude: ActiveValue::Set(0),
        news_channel_id: ActiveValue::Set(None),
        news_webhook_url: ActiveValue::Set(None),
        news_include_exclude: ActiveValue::Set(0),
        notification_channel_id: ActiveValue::Set(None),
        notification_webhook_url: ActiveValue::Set(None),
        notification_button_fc: ActiveValue::Set(1),
        notification_button_g4l: ActiveValue::Set(1),
        notification_button_sf: ActiveValue::Set(1),
        notification_end_status: ActiveValue::Set(1),
        notification_hold: ActiveValue::Set(1),
        notification_liftoff: ActiveValue::Set(1),
        notification_go: ActiveValue::Set(1),
        notification_tbc: ActiveValue::Set(1),
        notification_tbd: ActiveValue::Set(1),
        notification_deploy: ActiveValue::Set(1),
        notification_event: ActiveValue::Set(1),
        notification_launch: ActiveValue::Set(1),
        notification_t0_change: ActiveValue::Set(1),
    }
}

/// Channel and URL columns holding the webhook of a category.
fn webhook_columns(category: WebhookCategory) -> (Column, Column) {
    match category {
        WebhookCategory::General => (Column::ChannelId, Column::WebhookUrl),
        WebhookCategory::News => (Column::NewsChannelId, Column::NewsWebhookUrl),
        WebhookCategory::Notifications => (
            Column::NotificationChannelId,
            Column::NotificationWebhookUrl,
        ),
    }
}

/// Toggle columns set by the update, coerced to `0`/`1`.
fn toggle_values(param: &UpdateSettingsParam) -> Vec<(Column, i32)> {
    [
        (Column::SeLaunch, param.se_launch),
        (Column::SeEvent, param.se_event),
        (Column::SeNoUrl, param.se_no_url),
        (Column::NotificationButtonFc, param.notification_button_fc),
        (Column::NotificationButtonG4l, param.notification_button_g4l),
        (Column::NotificationButtonSf, param.notification_button_sf),
        (Column::NotificationEndStatus, param.notification_end_status),
        (Column::NotificationHold, param.notification_hold),
        (Column::NotificationLiftoff, param.notification_liftoff),
        (Column::NotificationGo, param.notification_go),
        (Column::NotificationTbc, param.notification_tbc),
        (Column::NotificationTbd, param.notification_tbd),
        (Column::NotificationDeploy, param.notification_deploy),
        (Column::NotificationEvent, param.notification_event),
        (Column::NotificationLaunch, param.notification_launch),
        (Column::NotificationT0Change, param.notification_t0_change),
    ]
    .into_iter()
    .filter_map(|(column, value)| value.map(|enabled| (column, i32::from(enabled))))
    .collect()
}

pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the settings of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildSettings))` - The guild has a settings row
    /// - `Ok(None)` - The guild never enabled LiveLaunch
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, guild_id: u64) -> Result<Option<GuildSettings>, DbErr> {
        let entity = entity::prelude::EnabledGuild::find_by_id(guild_id as i64)
            .one(self.db)
            .await?;

        Ok(entity.map(GuildSettings::from_entity))
    }

    /// Returns which of the given guilds have a settings row.
    pub async fn enabled_among(&self, guild_ids: &[u64]) -> Result<HashSet<u64>, DbErr> {
        if guild_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<i64> = guild_ids.iter().map(|id| *id as i64).collect();
        let enabled: Vec<i64> = entity::prelude::EnabledGuild::find()
            .select_only()
            .column(Column::GuildId)
            .filter(Column::GuildId.is_in(ids))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(enabled.into_iter().map(|id| id as u64).collect())
    }

    /// Applies a partial update, creating the row with defaults first if needed.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Settings after the update
    /// - `Err(DbErr)` - Database error during insert, update, or reload
    pub async fn update(
        &self,
        guild_id: u64,
        param: &UpdateSettingsParam,
    ) -> Result<GuildSettings, DbErr> {
        insert_default_if_missing(self.db, guild_id).await?;

        let mut update = entity::prelude::EnabledGuild::update_many()
            .filter(Column::GuildId.eq(guild_id as i64));
        if let Some(count) = param.scheduled_events {
            update = update.col_expr(Column::ScheduledEvents, Expr::value(count));
        }
        for (column, value) in toggle_values(param) {
            update = update.col_expr(column, Expr::value(value));
        }
        update.exec(self.db).await?;

        self.find(guild_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("enabled_guilds row {} after update", guild_id))
        })
    }

    /// Writes or clears the channel/URL pair of a webhook category.
    ///
    /// Both columns are always written together. Setting a target creates the settings row
    /// if needed; clearing one on a guild without a row does nothing.
    pub async fn set_webhook(
        &self,
        guild_id: u64,
        category: WebhookCategory,
        target: Option<&WebhookTarget>,
    ) -> Result<(), DbErr> {
        if target.is_some() {
            insert_default_if_missing(self.db, guild_id).await?;
        }

        let (channel_column, url_column) = webhook_columns(category);
        let (channel_id, url) = match target {
            Some(target) => (Some(target.channel_id as i64), Some(target.url.clone())),
            None => (None, None),
        };

        entity::prelude::EnabledGuild::update_many()
            .filter(Column::GuildId.eq(guild_id as i64))
            .col_expr(channel_column, Expr::value(channel_id))
            .col_expr(url_column, Expr::value(url))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
