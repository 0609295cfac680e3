//! Agency and news-site filter models.
//!
//! A filter row marks an item as selected for a guild. Whether a selected item is shown or
//! hidden depends on the guild's mode for that list.

use std::str::FromStr;

use crate::{
    model::filter::{FilterItemDto, FilterModeDto, GuildFilterDto, ReferenceItemDto, UpdateFilterDto},
    server::error::settings::SettingsError,
};

/// Which reference list a filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Agencies,
    NewsSites,
}

impl FromStr for FilterKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agencies" => Ok(Self::Agencies),
            "news-sites" => Ok(Self::NewsSites),
            other => Err(SettingsError::UnknownFilterKind(other.to_string())),
        }
    }
}

/// Stored as `0` (exclude, the default) or `1` (include).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Exclude,
    Include,
}

impl FilterMode {
    pub fn from_column(value: i32) -> Self {
        if value == 0 {
            Self::Exclude
        } else {
            Self::Include
        }
    }

    pub fn as_column(self) -> i32 {
        match self {
            Self::Exclude => 0,
            Self::Include => 1,
        }
    }

    /// Effective visibility of an item in this mode.
    pub fn shows(self, selected: bool) -> bool {
        match self {
            Self::Exclude => !selected,
            Self::Include => selected,
        }
    }

    pub fn into_dto(self) -> FilterModeDto {
        match self {
            Self::Exclude => FilterModeDto::Exclude,
            Self::Include => FilterModeDto::Include,
        }
    }
}

impl From<FilterModeDto> for FilterMode {
    fn from(dto: FilterModeDto) -> Self {
        match dto {
            FilterModeDto::Exclude => Self::Exclude,
            FilterModeDto::Include => Self::Include,
        }
    }
}

/// An agency or news site maintained by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceItem {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
}

impl ReferenceItem {
    pub fn from_agency(entity: entity::ll2_agency::Model) -> Self {
        Self {
            id: entity.agency_id,
            name: entity.name,
            logo_url: entity.logo_url,
        }
    }

    pub fn from_news_site(entity: entity::news_site::Model) -> Self {
        Self {
            id: entity.news_site_id,
            name: entity.news_site_name,
            logo_url: entity.logo_url,
        }
    }

    pub fn into_dto(self) -> ReferenceItemDto {
        ReferenceItemDto {
            id: self.id,
            name: self.name,
            logo_url: self.logo_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterItem {
    pub item: ReferenceItem,
    pub selected: bool,
}

/// A guild's filter for one reference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildFilter {
    pub mode: FilterMode,
    pub items: Vec<FilterItem>,
}

impl GuildFilter {
    pub fn into_dto(self) -> GuildFilterDto {
        let mode = self.mode;
        GuildFilterDto {
            mode: mode.into_dto(),
            items: self
                .items
                .into_iter()
                .map(|filter_item| FilterItemDto {
                    id: filter_item.item.id,
                    name: filter_item.item.name,
                    logo_url: filter_item.item.logo_url,
                    selected: filter_item.selected,
                    shown: mode.shows(filter_item.selected),
                })
                .collect(),
        }
    }
}

/// Parameters for replacing a guild's filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceFilterParam {
    pub mode: FilterMode,
    pub selected: Vec<i32>,
}

impl ReplaceFilterParam {
    /// Selected ids sorted with duplicates removed.
    pub fn unique_selected(&self) -> Vec<i32> {
        let mut ids = self.selected.clone();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

impl From<UpdateFilterDto> for ReplaceFilterParam {
    fn from(dto: UpdateFilterDto) -> Self {
        Self {
            mode: dto.mode.into(),
            selected: dto.selected,
        }
    }
}
