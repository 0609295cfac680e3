use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_enabled_guilds_table::EnabledGuilds;
use super::m20260301_000004_create_ll2_agencies_table::Ll2Agencies;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ll2AgenciesFilter::Table)
                    .if_not_exists()
                    .col(big_integer(Ll2AgenciesFilter::GuildId))
                    .col(integer(Ll2AgenciesFilter::AgencyId))
                    .primary_key(
                        Index::create()
                            .col(Ll2AgenciesFilter::GuildId)
                            .col(Ll2AgenciesFilter::AgencyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ll2_agencies_filter_guild_id")
                            .from(Ll2AgenciesFilter::Table, Ll2AgenciesFilter::GuildId)
                            .to(EnabledGuilds::Table, EnabledGuilds::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ll2_agencies_filter_agency_id")
                            .from(Ll2AgenciesFilter::Table, Ll2AgenciesFilter::AgencyId)
                            .to(Ll2Agencies::Table, Ll2Agencies::AgencyId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ll2AgenciesFilter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ll2AgenciesFilter {
    #[sea_orm(iden = "ll2_agencies_filter")]
    Table,
    GuildId,
    AgencyId,
}
