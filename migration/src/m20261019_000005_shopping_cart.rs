use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000001_recipebox_user::RecipeboxUser, m20261019_000003_recipe::Recipe,
};

static IDX_SHOPPING_CART_RECIPE_ID: &str = "idx-shopping_cart-recipe_id";
static FK_SHOPPING_CART_USER_ID: &str = "fk-shopping_cart-user_id";
static FK_SHOPPING_CART_RECIPE_ID: &str = "fk-shopping_cart-recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShoppingCart::Table)
                    .if_not_exists()
                    .col(integer(ShoppingCart::UserId))
                    .col(integer(ShoppingCart::RecipeId))
                    .col(timestamp(ShoppingCart::CreatedAt))
                    .primary_key(Index::create().col(ShoppingCart::UserId).col(ShoppingCart::RecipeId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOPPING_CART_RECIPE_ID)
                    .table(ShoppingCart::Table)
                    .col(ShoppingCart::RecipeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHOPPING_CART_USER_ID)
                    .from_tbl(ShoppingCart::Table)
                    .from_col(ShoppingCart::UserId)
                    .to_tbl(RecipeboxUser::Table)
                    .to_col(RecipeboxUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHOPPING_CART_RECIPE_ID)
                    .from_tbl(ShoppingCart::Table)
                    .from_col(ShoppingCart::RecipeId)
                    .to_tbl(Recipe::Table)
                    .to_col(Recipe::Id)
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
                    .name(FK_SHOPPING_CART_RECIPE_ID)
                    .table(ShoppingCart::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHOPPING_CART_USER_ID)
                    .table(ShoppingCart::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOPPING_CART_RECIPE_ID)
                    .table(ShoppingCart::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShoppingCart::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ShoppingCart {
    Table,
    UserId,
    RecipeId,
    CreatedAt,
}
