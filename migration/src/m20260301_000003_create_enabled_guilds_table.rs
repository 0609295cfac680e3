use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EnabledGuilds::Table)
                    .if_not_exists()
                    .col(big_integer(EnabledGuilds::GuildId).primary_key())
                    .col(big_integer_null(EnabledGuilds::ChannelId))
                    .col(text_null(EnabledGuilds::WebhookUrl))
                    .col(integer(EnabledGuilds::ScheduledEvents).default(0))
                    .col(integer(EnabledGuilds::SeLaunch).default(1))
                    .col(integer(EnabledGuilds::SeEvent).default(1))
                    .col(integer(EnabledGuilds::SeNoUrl).default(0))
                    .col(integer(EnabledGuilds::AgenciesIncludeExclude).default(0))
                    .col(big_integer_null(EnabledGuilds::NewsChannelId))
                    .col(text_null(EnabledGuilds::NewsWebhookUrl))
                    .col(integer(EnabledGuilds::NewsIncludeExclude).default(0))
                    .col(big_integer_null(EnabledGuilds::NotificationChannelId))
                    .col(text_null(EnabledGuilds::NotificationWebhookUrl))
                    .col(integer(EnabledGuilds::NotificationButtonFc).default(1))
                    .col(integer(EnabledGuilds::NotificationButtonG4l).default(1))
                    .col(integer(EnabledGuilds::NotificationButtonSf).default(1))
                    .col(integer(EnabledGuilds::NotificationEndStatus).default(1))
                    .col(integer(EnabledGuilds::NotificationHold).default(1))
                    .col(integer(EnabledGuilds::NotificationLiftoff).default(1))
                    .col(integer(EnabledGuilds::NotificationGo).default(1))
                    .col(integer(EnabledGuilds::NotificationTbc).default(1))
                    .col(integer(EnabledGuilds::NotificationTbd).default(1))
                    .col(integer(EnabledGuilds::NotificationDeploy).default(1))
                    .col(integer(EnabledGuilds::NotificationEvent).default(1))
                    .col(integer(EnabledGuilds::NotificationLaunch).default(1))
                    .col(integer(EnabledGuilds::NotificationT0Change).default(1))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EnabledGuilds::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EnabledGuilds {
    Table,
    GuildId,
    ChannelId,
    WebhookUrl,
    ScheduledEvents,
    SeLaunch,
    SeEvent,
    SeNoUrl,
    AgenciesIncludeExclude,
    NewsChannelId,
    NewsWebhookUrl,
    NewsIncludeExclude,
    NotificationChannelId,
    NotificationWebhookUrl,
    NotificationButtonFc,
    #[sea_orm(iden = "notification_button_g4l")]
    NotificationButtonG4l,
    NotificationButtonSf,
    NotificationEndStatus,
    NotificationHold,
    NotificationLiftoff,
    NotificationGo,
    NotificationTbc,
    NotificationTbd,
    NotificationDeploy,
    NotificationEvent,
    NotificationLaunch,
    #[sea_orm(iden = "notification_t0_change")]
    NotificationT0Change,
}
