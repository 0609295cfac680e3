use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "news_filter")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub news_site_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enabled_guild::Entity",
        from = "Column::GuildId",
        to = "super::enabled_guild::Column::GuildId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    EnabledGuild,
    #[sea_orm(
        belongs_to = "super::news_site::Entity",
        from = "Column::NewsSiteId",
        to = "super::news_site::Column::NewsSiteId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    NewsSite,
}

impl Related<super::enabled_guild::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnabledGuild.def()
    }
}

impl Related<super::news_site::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsSite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
