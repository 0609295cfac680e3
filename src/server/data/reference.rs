//! Read access to the bot-maintained agency and news-site lists.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::filter::{FilterKind, ReferenceItem};

pub struct ReferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every item of a reference list ordered by name.
    pub async fn get_all(&self, kind: FilterKind) -> Result<Vec<ReferenceItem>, DbErr> {
        let items = match kind {
            FilterKind::Agencies => entity::prelude::Ll2Agency::find()
                .order_by_asc(entity::ll2_agency::Column::Name)
                .all(self.db)
                .await?
                .into_iter()
                .map(ReferenceItem::from_agency)
                .collect(),
            FilterKind::NewsSites => entity::prelude::NewsSite::find()
                .order_by_asc(entity::news_site::Column::NewsSiteName)
                .all(self.db)
                .await?
                .into_iter()
                .map(ReferenceItem::from_news_site)
                .collect(),
        };

        Ok(items)
    }
}
