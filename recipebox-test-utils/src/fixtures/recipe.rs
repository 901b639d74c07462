use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    /// Insert an ingredient with the provided name & measurement unit
    pub async fn insert_mock_ingredient(
        &self,
        name: &str,
        measurement_unit: &str,
    ) -> Result<entity::ingredient::Model, TestError> {
        Ok(
            entity::prelude::Ingredient::insert(entity::ingredient::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                measurement_unit: ActiveValue::Set(measurement_unit.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    /// Insert a recipe authored by `author_id` without a short code
    ///
    /// `lines` is a list of `(ingredient_id, amount)` pairs inserted as the recipe's
    /// ingredient lines.
    pub async fn insert_mock_recipe(
        &self,
        author_id: i32,
        name: &str,
        lines: &[(i32, i32)],
    ) -> Result<entity::recipe::Model, TestError> {
        self.insert_mock_recipe_with_short_code(author_id, name, None, lines)
            .await
    }

    /// Insert a recipe authored by `author_id` with an optional short code
    pub async fn insert_mock_recipe_with_short_code(
        &self,
        author_id: i32,
        name: &str,
        short_code: Option<&str>,
        lines: &[(i32, i32)],
    ) -> Result<entity::recipe::Model, TestError> {
        let recipe = entity::prelude::Recipe::insert(entity::recipe::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            text: ActiveValue::Set(format!("How to make {}", name)),
            cooking_time: ActiveValue::Set(30),
            author_id: ActiveValue::Set(author_id),
            short_code: ActiveValue::Set(short_code.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.state.db)
        .await?;

        for (ingredient_id, amount) in lines {
            entity::prelude::RecipeIngredient::insert(entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe.id),
                ingredient_id: ActiveValue::Set(*ingredient_id),
                amount: ActiveValue::Set(*amount),
            })
            .exec_without_returning(&self.state.db)
            .await?;
        }

        Ok(recipe)
    }

    /// Put a recipe into the user's shopping cart
    pub async fn insert_cart_entry(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<entity::shopping_cart::Model, TestError> {
        Ok(
            entity::prelude::ShoppingCart::insert(entity::shopping_cart::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                recipe_id: ActiveValue::Set(recipe_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    /// Mark a recipe as a favorite of the user
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                recipe_id: ActiveValue::Set(recipe_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }
}
