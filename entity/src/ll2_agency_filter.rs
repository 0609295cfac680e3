use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ll2_agencies_filter")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub agency_id: i32,
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
        belongs_to = "super::ll2_agency::Entity",
        from = "Column::AgencyId",
        to = "super::ll2_agency::Column::AgencyId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Ll2Agency,
}

impl Related<super::enabled_guild::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnabledGuild.def()
    }
}

impl Related<super::ll2_agency::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ll2Agency.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
