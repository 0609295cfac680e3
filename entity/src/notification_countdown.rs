use sea_orm::entity::prelude::*;

/// Lead time in minutes before a launch at which a notification fires.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification_countdown")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub minutes: i32,
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
}

impl Related<super::enabled_guild::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnabledGuild.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
