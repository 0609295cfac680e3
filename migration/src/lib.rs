pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_account_table;
mod m20260301_000003_create_enabled_guilds_table;
mod m20260301_000004_create_ll2_agencies_table;
mod m20260301_000005_create_news_sites_table;
mod m20260301_000006_create_ll2_agencies_filter_table;
mod m20260301_000007_create_news_filter_table;
mod m20260301_000008_create_notification_countdown_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_account_table::Migration),
            Box::new(m20260301_000003_create_enabled_guilds_table::Migration),
            Box::new(m20260301_000004_create_ll2_agencies_table::Migration),
            Box::new(m20260301_000005_create_news_sites_table::Migration),
            Box::new(m20260301_000006_create_ll2_agencies_filter_table::Migration),
            Box::new(m20260301_000007_create_news_filter_table::Migration),
            Box::new(m20260301_000008_create_notification_countdown_table::Migration),
        ]
    }
}
