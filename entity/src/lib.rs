//! SeaORM entities for the tables shared with the LiveLaunch bot and the dashboard's own
//! user/account tables.

pub mod prelude;

pub mod account;
pub mod enabled_guild;
pub mod ll2_agency;
pub mod ll2_agency_filter;
pub mod news_filter;
pub mod news_site;
pub mod notification_countdown;
pub mod user;
