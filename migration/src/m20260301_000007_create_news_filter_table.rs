use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_enabled_guilds_table::EnabledGuilds;
use super::m20260301_000005_create_news_sites_table::NewsSites;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsFilter::Table)
                    .if_not_exists()
                    .col(big_integer(NewsFilter::GuildId))
                    .col(integer(NewsFilter::NewsSiteId))
                    .primary_key(
                        Index::create()
                            .col(NewsFilter::GuildId)
                            .col(NewsFilter::NewsSiteId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_filter_guild_id")
                            .from(NewsFilter::Table, NewsFilter::GuildId)
                            .to(EnabledGuilds::Table, EnabledGuilds::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_filter_news_site_id")
                            .from(NewsFilter::Table, NewsFilter::NewsSiteId)
                            .to(NewsSites::Table, NewsSites::NewsSiteId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsFilter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsFilter {
    Table,
    GuildId,
    NewsSiteId,
}
