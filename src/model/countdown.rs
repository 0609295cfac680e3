use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CountdownDto {
    /// Lead time in minutes, also the countdown's identifier within the guild.
    pub total_minutes: i32,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCountdownDto {
    #[serde(default)]
    pub days: i32,
    #[serde(default)]
    pub hours: i32,
    #[serde(default)]
    pub minutes: i32,
}
