use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a countdown for the guild at the given total minutes.
pub async fn create_countdown(
    db: &DatabaseConnection,
    guild_id: i64,
    minutes: i32,
) -> Result<entity::notification_countdown::Model, DbErr> {
    entity::notification_countdown::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        minutes: ActiveValue::Set(minutes),
    }
    .insert(db)
    .await
}
