use sea_orm_migration::{prelude::*, schema::*};

static IDX_INGREDIENT_NAME_UNIT: &str = "idx-ingredient-name-measurement_unit";

const INGREDIENT_NAME_MAX_LENGTH: u32 = 128;
const MEASUREMENT_UNIT_MAX_LENGTH: u32 = 64;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredient::Table)
                    .if_not_exists()
                    .col(pk_auto(Ingredient::Id))
                    .col(string_len(Ingredient::Name, INGREDIENT_NAME_MAX_LENGTH))
                    .col(string_len(
                        Ingredient::MeasurementUnit,
                        MEASUREMENT_UNIT_MAX_LENGTH,
                    ))
                    .to_owned(),
            )
            .await?;

        // An ingredient is identified by its name and unit together
        manager
            .create_index(
                Index::create()
                    .name(IDX_INGREDIENT_NAME_UNIT)
                    .table(Ingredient::Table)
                    .col(Ingredient::Name)
                    .col(Ingredient::MeasurementUnit)
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
                    .name(IDX_INGREDIENT_NAME_UNIT)
                    .table(Ingredient::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ingredient::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    MeasurementUnit,
}
