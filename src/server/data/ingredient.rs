use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::IngredientModel;

pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    /// Creates a new instance of [`IngredientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get ingredients for the provided IDs, IDs without a matching ingredient are skipped
    pub async fn find_by_ids(
        &self,
        ingredient_ids: &[i32],
    ) -> Result<Vec<IngredientModel>, DbErr> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Id.is_in(ingredient_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Search ingredients by case-insensitive name prefix ordered by name, then measurement unit
    ///
    /// Returns every ingredient when no prefix is provided. Names are compared after Unicode
    /// lowercasing in Rust since SQLite's `LOWER` only folds ASCII, the prefix is matched
    /// literally so `%` and `_` carry no wildcard meaning.
    pub async fn search_by_name(
        &self,
        name_prefix: Option<&str>,
    ) -> Result<Vec<IngredientModel>, DbErr> {
        let ingredients = entity::prelude::Ingredient::find()
            .order_by_asc(entity::ingredient::Column::Name)
            .order_by_asc(entity::ingredient::Column::MeasurementUnit)
            .all(self.db)
            .await?;

        let Some(prefix) = name_prefix.filter(|prefix| !prefix.is_empty()) else {
            return Ok(ingredients);
        };
        let prefix = prefix.to_lowercase();

        Ok(ingredients
            .into_iter()
            .filter(|ingredient| ingredient.name.to_lowercase().starts_with(&prefix))
            .collect())
    }
}
