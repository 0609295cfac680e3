use sea_orm::entity::prelude::*;

/// Launch Library 2 agency, maintained by the bot.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ll2_agencies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub agency_id: i32,
    pub name: String,
    pub logo_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ll2_agency_filter::Entity")]
    Ll2AgencyFilter,
}

impl Related<super::ll2_agency_filter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ll2AgencyFilter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
