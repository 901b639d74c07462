use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_recipebox_user::RecipeboxUser;

static IDX_RECIPE_AUTHOR_ID: &str = "idx-recipe-author_id";
static FK_RECIPE_AUTHOR_ID: &str = "fk-recipe-author_id";

const RECIPE_NAME_MAX_LENGTH: u32 = 256;
const SHORT_CODE_MAX_LENGTH: u32 = 8;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipe::Id))
                    .col(string_len(Recipe::Name, RECIPE_NAME_MAX_LENGTH))
                    .col(text(Recipe::Text))
                    .col(integer(Recipe::CookingTime))
                    .col(integer(Recipe::AuthorId))
                    // Nullable: recipes created while links are derived from the ID carry no code
                    .col(string_len_null(Recipe::ShortCode, SHORT_CODE_MAX_LENGTH).unique_key())
                    .col(timestamp(Recipe::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_AUTHOR_ID)
                    .table(Recipe::Table)
                    .col(Recipe::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECIPE_AUTHOR_ID)
                    .from_tbl(Recipe::Table)
                    .from_col(Recipe::AuthorId)
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
                    .name(FK_RECIPE_AUTHOR_ID)
                    .table(Recipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_AUTHOR_ID)
                    .table(Recipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Recipe {
    Table,
    Id,
    Name,
    Text,
    CookingTime,
    AuthorId,
    ShortCode,
    CreatedAt,
}
