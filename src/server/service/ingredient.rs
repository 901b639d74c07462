use sea_orm::DatabaseConnection;

use crate::{
    model::ingredient::IngredientDto,
    server::{data::ingredient::IngredientRepository, error::Error},
};

pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    /// Creates a new instance of [`IngredientService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists ingredients whose name starts with `name_prefix` ignoring case, every ingredient
    /// when `None`
    pub async fn search(&self, name_prefix: Option<&str>) -> Result<Vec<IngredientDto>, Error> {
        let ingredients = IngredientRepository::new(self.db)
            .search_by_name(name_prefix)
            .await?;

        Ok(ingredients
            .into_iter()
            .map(|ingredient| IngredientDto {
                id: ingredient.id,
                name: ingredient.name,
                measurement_unit: ingredient.measurement_unit,
            })
            .collect())
    }
}
