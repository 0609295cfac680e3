use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserDto {
    /// Discord user ID.
    pub id: String,
    pub name: String,
}
