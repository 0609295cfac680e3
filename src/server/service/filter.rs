//! Agency and news-site filters.

use std::{collections::HashSet, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        filter::FilterRepository, guild_settings::GuildSettingsRepository,
        reference::ReferenceRepository,
    },
    error::{settings::SettingsError, AppError},
    model::filter::{
        FilterItem, FilterKind, GuildFilter, ReferenceItem, ReplaceFilterParam,
    },
    service::cache::TtlCache,
    state::AppState,
};

/// Reference lists change when the bot syncs with its data sources, a few times a day.
pub const REFERENCE_TTL: Duration = Duration::from_secs(60 * 60);

pub type ReferenceCache = TtlCache<FilterKind, Vec<ReferenceItem>>;

pub struct FilterService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ReferenceCache,
}

impl<'a> FilterService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            db: &state.db,
            cache: &state.reference_cache,
        }
    }

    /// Gets every item of a reference list, ordered by name.
    pub async fn reference_items(&self, kind: FilterKind) -> Result<Vec<ReferenceItem>, AppError> {
        if let Some(items) = self.cache.get(&kind).await {
            return Ok(items);
        }

        let items = ReferenceRepository::new(self.db).get_all(kind).await?;
        self.cache.insert(kind, items.clone()).await;

        Ok(items)
    }

    /// Gets a guild's filter mode together with every item and its selection.
    ///
    /// Guilds without settings get the default exclude mode with nothing selected.
    pub async fn get(&self, guild_id: u64, kind: FilterKind) -> Result<GuildFilter, AppError> {
        let mode = GuildSettingsRepository::new(self.db)
            .find(guild_id)
            .await?
            .map(|settings| match kind {
                FilterKind::Agencies => settings.agencies_mode,
                FilterKind::NewsSites => settings.news_mode,
            })
            .unwrap_or_default();

        let selected: HashSet<i32> = FilterRepository::new(self.db)
            .get_selected(guild_id, kind)
            .await?
            .into_iter()
            .collect();

        let items = self
            .reference_items(kind)
            .await?
            .into_iter()
            .map(|item| FilterItem {
                selected: selected.contains(&item.id),
                item,
            })
            .collect();

        Ok(GuildFilter { mode, items })
    }

    /// Replaces a guild's filter mode and selection.
    ///
    /// # Returns
    /// - `Ok(GuildFilter)` - The stored filter
    /// - `Err(SettingsError::UnknownFilterItems)` - Ids not present in the reference list
    /// - `Err(AppError::DbErr)` - Database error; the previous filter is kept
    pub async fn replace(
        &self,
        guild_id: u64,
        kind: FilterKind,
        param: ReplaceFilterParam,
    ) -> Result<GuildFilter, AppError> {
        let selected = param.unique_selected();

        let mut unknown = self.unknown_ids(kind, &selected).await?;
        if !unknown.is_empty() {
            // The list may have grown since it was cached.
            self.cache.invalidate(&kind).await;
            unknown = self.unknown_ids(kind, &selected).await?;
        }
        if !unknown.is_empty() {
            return Err(SettingsError::UnknownFilterItems(unknown).into());
        }

        FilterRepository::new(self.db)
            .replace(guild_id, kind, param.mode, &selected)
            .await?;
        tracing::debug!(
            "Replaced {:?} filter of guild {}: {:?} with {} items",
            kind,
            guild_id,
            param.mode,
            selected.len()
        );

        self.get(guild_id, kind).await
    }

    async fn unknown_ids(&self, kind: FilterKind, ids: &[i32]) -> Result<Vec<i32>, AppError> {
        let known: HashSet<i32> = self
            .reference_items(kind)
            .await?
            .iter()
            .map(|item| item.id)
            .collect();

        Ok(ids.iter().copied().filter(|id| !known.contains(id)).collect())
    }
}
