use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_recipebox_user::RecipeboxUser;

static IDX_SUBSCRIPTION_USER_TO_ID: &str = "idx-subscription-user_to_id";
static FK_SUBSCRIPTION_USER_FROM_ID: &str = "fk-subscription-user_from_id";
static FK_SUBSCRIPTION_USER_TO_ID: &str = "fk-subscription-user_to_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(integer(Subscription::UserFromId))
                    .col(integer(Subscription::UserToId))
                    .col(timestamp(Subscription::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(Subscription::UserFromId)
                            .col(Subscription::UserToId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBSCRIPTION_USER_TO_ID)
                    .table(Subscription::Table)
                    .col(Subscription::UserToId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSCRIPTION_USER_FROM_ID)
                    .from_tbl(Subscription::Table)
                    .from_col(Subscription::UserFromId)
                    .to_tbl(RecipeboxUser::Table)
                    .to_col(RecipeboxUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSCRIPTION_USER_TO_ID)
                    .from_tbl(Subscription::Table)
                    .from_col(Subscription::UserToId)
                    .to_tbl(RecipeboxUser::Table)
                    .to_col(RecipeboxUser::Id)
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
                    .name(FK_SUBSCRIPTION_USER_TO_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SUBSCRIPTION_USER_FROM_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SUBSCRIPTION_USER_TO_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Subscription {
    Table,
    UserFromId,
    UserToId,
    CreatedAt,
}
