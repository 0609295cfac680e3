//! Filter selection repository.
//!
//! Selections are replaced wholesale on every save: the mode column is written, the guild's
//! rows for the list are deleted, and the new selection is inserted, all in one transaction.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::guild_settings::insert_default_if_missing,
    model::filter::{FilterKind, FilterMode},
};

pub struct FilterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FilterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the ids of the items the guild selected in a list, ascending.
    pub async fn get_selected(&self, guild_id: u64, kind: FilterKind) -> Result<Vec<i32>, DbErr> {
        let guild_id = guild_id as i64;

        match kind {
            FilterKind::Agencies => {
                entity::prelude::Ll2AgencyFilter::find()
                    .select_only()
                    .column(entity::ll2_agency_filter::Column::AgencyId)
                    .filter(entity::ll2_agency_filter::Column::GuildId.eq(guild_id))
                    .order_by_asc(entity::ll2_agency_filter::Column::AgencyId)
                    .into_tuple()
                    .all(self.db)
                    .await
            }
            FilterKind::NewsSites => {
                entity::prelude::NewsFilter::find()
                    .select_only()
                    .column(entity::news_filter::Column::NewsSiteId)
                    .filter(entity::news_filter::Column::GuildId.eq(guild_id))
                    .order_by_asc(entity::news_filter::Column::NewsSiteId)
                    .into_tuple()
                    .all(self.db)
                    .await
            }
        }
    }

    /// Replaces the guild's mode and selection for a list.
    ///
    /// Creates the settings row with defaults first if the guild has none. `selected` must
    /// not contain duplicates.
    ///
    /// # Returns
    /// - `Ok(())` - Mode and selection stored
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn replace(
        &self,
        guild_id: u64,
        kind: FilterKind,
        mode: FilterMode,
        selected: &[i32],
    ) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;
        insert_default_if_missing(&txn, guild_id).await?;

        let gid = guild_id as i64;
        let mode_column = match kind {
            FilterKind::Agencies => entity::enabled_guild::Column::AgenciesIncludeExclude,
            FilterKind::NewsSites => entity::enabled_guild::Column::NewsIncludeExclude,
        };
        entity::prelude::EnabledGuild::update_many()
            .filter(entity::enabled_guild::Column::GuildId.eq(gid))
            .col_expr(mode_column, Expr::value(mode.as_column()))
            .exec(&txn)
            .await?;

        match kind {
            FilterKind::Agencies => {
                entity::prelude::Ll2AgencyFilter::delete_many()
                    .filter(entity::ll2_agency_filter::Column::GuildId.eq(gid))
                    .exec(&txn)
                    .await?;

                if !selected.is_empty() {
                    entity::prelude::Ll2AgencyFilter::insert_many(selected.iter().map(|id| {
                        entity::ll2_agency_filter::ActiveModel {
                            guild_id: ActiveValue::Set(gid),
                            agency_id: ActiveValue::Set(*id),
                        }
                    }))
                    .exec_without_returning(&txn)
                    .await?;
                }
            }
            FilterKind::NewsSites => {
                entity::prelude::NewsFilter::delete_many()
                    .filter(entity::news_filter::Column::GuildId.eq(gid))
                    .exec(&txn)
                    .await?;

                if !selected.is_empty() {
                    entity::prelude::NewsFilter::insert_many(selected.iter().map(|id| {
                        entity::news_filter::ActiveModel {
                            guild_id: ActiveValue::Set(gid),
                            news_site_id: ActiveValue::Set(*id),
                        }
                    }))
                    .exec_without_returning(&txn)
                    .await?;
                }
            }
        }

        txn.commit().await
    }
}
