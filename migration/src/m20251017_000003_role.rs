use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_person::Person, m20251017_000002_group::Group};

static IDX_ROLE_PERSON_ID: &str = "idx-role-person_id";
static IDX_ROLE_GROUP_ID_ROLE_TYPE: &str = "idx-role-group_id-role_type";
static FK_ROLE_PERSON_ID: &str = "fk-role-person_id";
static FK_ROLE_GROUP_ID: &str = "fk-role-group_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(pk_auto(Role::Id))
                    .col(integer(Role::PersonId))
                    .col(integer(Role::GroupId))
                    .col(string(Role::RoleType))
                    .col(timestamp(Role::CreatedAt))
                    .col(timestamp(Role::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROLE_PERSON_ID)
                    .table(Role::Table)
                    .col(Role::PersonId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROLE_GROUP_ID_ROLE_TYPE)
                    .table(Role::Table)
                    .col(Role::GroupId)
                    .col(Role::RoleType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROLE_PERSON_ID)
                    .from_tbl(Role::Table)
                    .from_col(Role::PersonId)
                    .to_tbl(Person::Table)
                    .to_col(Person::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROLE_GROUP_ID)
                    .from_tbl(Role::Table)
                    .from_col(Role::GroupId)
                    .to_tbl(Group::Table)
                    .to_col(Group::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROLE_GROUP_ID)
                    .table(Role::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROLE_PERSON_ID)
                    .table(Role::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROLE_GROUP_ID_ROLE_TYPE)
                    .table(Role::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROLE_PERSON_ID)
                    .table(Role::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Role {
    #[sea_orm(iden = "roles")]
    Table,
    Id,
    PersonId,
    GroupId,
    RoleType,
    CreatedAt,
    UpdatedAt,
}
