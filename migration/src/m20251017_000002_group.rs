use sea_orm_migration::{prelude::*, schema::*};

static IDX_GROUP_PARENT_ID: &str = "idx-group-parent_id";
static FK_GROUP_PARENT_ID: &str = "fk-group-parent_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Group::Table)
                    .if_not_exists()
                    .col(pk_auto(Group::Id))
                    .col(integer_null(Group::ParentId))
                    .col(string(Group::Name))
                    .col(string(Group::GroupType))
                    .col(timestamp(Group::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GROUP_PARENT_ID)
                    .table(Group::Table)
                    .col(Group::ParentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GROUP_PARENT_ID)
                    .from_tbl(Group::Table)
                    .from_col(Group::ParentId)
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
                    .name(FK_GROUP_PARENT_ID)
                    .table(Group::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GROUP_PARENT_ID)
                    .table(Group::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Group::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Group {
    #[sea_orm(iden = "groups")]
    Table,
    Id,
    ParentId,
    Name,
    GroupType,
    CreatedAt,
}
