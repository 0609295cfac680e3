use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether selected items are hidden (`exclude`) or the only ones shown (`include`).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterModeDto {
    Exclude,
    Include,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ReferenceItemDto {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FilterItemDto {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub selected: bool,
    /// Effective visibility of the item given the filter mode.
    pub shown: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GuildFilterDto {
    pub mode: FilterModeDto,
    pub items: Vec<FilterItemDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateFilterDto {
    pub mode: FilterModeDto,
    pub selected: Vec<i32>,
}
