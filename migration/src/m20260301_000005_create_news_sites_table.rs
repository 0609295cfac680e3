use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsSites::Table)
                    .if_not_exists()
                    .col(integer(NewsSites::NewsSiteId).primary_key())
                    .col(string(NewsSites::NewsSiteName))
                    .col(text_null(NewsSites::LogoUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsSites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsSites {
    Table,
    NewsSiteId,
    NewsSiteName,
    LogoUrl,
}
