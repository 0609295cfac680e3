use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ll2Agencies::Table)
                    .if_not_exists()
                    .col(integer(Ll2Agencies::AgencyId).primary_key())
                    .col(string(Ll2Agencies::Name))
                    .col(text_null(Ll2Agencies::LogoUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ll2Agencies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ll2Agencies {
    #[sea_orm(iden = "ll2_agencies")]
    Table,
    AgencyId,
    Name,
    LogoUrl,
}
