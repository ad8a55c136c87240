use sea_orm_migration::{prelude::*, schema::*};

static IDX_PERSON_EMAIL: &str = "idx-person-email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string(Person::FirstName))
                    .col(string(Person::LastName))
                    .col(string_null(Person::Email))
                    .col(timestamp(Person::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PERSON_EMAIL)
                    .table(Person::Table)
                    .col(Person::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PERSON_EMAIL)
                    .table(Person::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Person {
    #[sea_orm(iden = "people")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    CreatedAt,
}
