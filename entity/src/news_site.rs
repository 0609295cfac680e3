use sea_orm::entity::prelude::*;

/// News site, maintained by the bot.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "news_sites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub news_site_id: i32,
    pub news_site_name: String,
    pub logo_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::news_filter::Entity")]
    NewsFilter,
}

impl Related<super::news_filter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsFilter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
