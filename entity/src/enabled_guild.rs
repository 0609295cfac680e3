use sea_orm::entity::prelude::*;

/// Per-guild settings row read by the LiveLaunch bot.
///
/// Toggles are stored as `0`/`1` integers. Each `*_channel_id` column is paired with a
/// `*_webhook_url` column; both are written and cleared together.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enabled_guilds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    pub channel_id: Option<i64>,
    pub webhook_url: Option<String>,
    pub scheduled_events: i32,
    pub se_launch: i32,
    pub se_event: i32,
    pub se_no_url: i32,
    pub agencies_include_exclude: i32,
    pub news_channel_id: Option<i64>,
    pub news_webhook_url: Option<String>,
    pub news_include_exclude: i32,
    pub notification_channel_id: Option<i64>,
    pub notification_webhook_url: Option<String>,
    pub notification_button_fc: i32,
    pub notification_button_g4l: i32,
    pub notification_button_sf: i32,
    pub notification_end_status: i32,
    pub notification_hold: i32,
    pub notification_liftoff: i32,
    pub notification_go: i32,
    pub notification_tbc: i32,
    pub notification_tbd: i32,
    pub notification_deploy: i32,
    pub notification_event: i32,
    pub notification_launch: i32,
    pub notification_t0_change: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ll2_agency_filter::Entity")]
    Ll2AgencyFilter,
    #[sea_orm(has_many = "super::news_filter::Entity")]
    NewsFilter,
    #[sea_orm(has_many = "super::notification_countdown::Entity")]
    NotificationCountdown,
}

impl Related<super::ll2_agency_filter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ll2AgencyFilter.def()
    }
}

impl Related<super::news_filter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsFilter.def()
    }
}

impl Related<super::notification_countdown::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotificationCountdown.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
