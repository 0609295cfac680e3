//! Factories for bot-maintained reference data (agencies, news sites).

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an agency with a unique id and the given name.
pub async fn create_agency(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::ll2_agency::Model, DbErr> {
    entity::ll2_agency::ActiveModel {
        agency_id: ActiveValue::Set(next_id() as i32),
        name: ActiveValue::Set(name.into()),
        logo_url: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Creates a news site with a unique id and the given name.
pub async fn create_news_site(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::news_site::Model, DbErr> {
    entity::news_site::ActiveModel {
        news_site_id: ActiveValue::Set(next_id() as i32),
        news_site_name: ActiveValue::Set(name.into()),
        logo_url: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
