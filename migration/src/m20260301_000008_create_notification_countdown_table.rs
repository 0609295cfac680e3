use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_enabled_guilds_table::EnabledGuilds;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationCountdown::Table)
                    .if_not_exists()
                    .col(big_integer(NotificationCountdown::GuildId))
                    .col(integer(NotificationCountdown::Minutes))
                    .primary_key(
                        Index::create()
                            .col(NotificationCountdown::GuildId)
                            .col(NotificationCountdown::Minutes),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_countdown_guild_id")
                            .from(NotificationCountdown::Table, NotificationCountdown::GuildId)
                            .to(EnabledGuilds::Table, EnabledGuilds::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationCountdown::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NotificationCountdown {
    Table,
    GuildId,
    Minutes,
}
