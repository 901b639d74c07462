use sea_orm::{
    sea_query::Query, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    db::{IngredientModel, RecipeIngredientModel},
    recipe::NewRecipeIngredient,
};

pub struct RecipeIngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeIngredientRepository<'a, C> {
    /// Creates a new instance of [`RecipeIngredientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the ingredient lines of a recipe
    pub async fn create_many(
        &self,
        recipe_id: i32,
        lines: &[NewRecipeIngredient],
    ) -> Result<(), DbErr> {
        if lines.is_empty() {
            return Ok(());
        }

        let models = lines
            .iter()
            .map(|line| entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                ingredient_id: ActiveValue::Set(line.ingredient_id),
                amount: ActiveValue::Set(line.amount),
            });

        entity::prelude::RecipeIngredient::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every ingredient line of a recipe
    pub async fn delete_by_recipe_id(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await
    }

    /// Get the ingredient lines of several recipes joined with their ingredient
    ///
    /// The ingredient is `None` only if referential integrity was broken.
    pub async fn get_lines_by_recipe_ids(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<(RecipeIngredientModel, Option<IngredientModel>)>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .order_by_asc(entity::recipe_ingredient::Column::RecipeId)
            .order_by_asc(entity::recipe_ingredient::Column::IngredientId)
            .find_also_related(entity::prelude::Ingredient)
            .all(self.db)
            .await
    }

    /// Get the ingredient lines of every recipe in the user's shopping cart
    ///
    /// Cart membership is resolved by a subquery, so lines and cart are read by a single
    /// statement.
    pub async fn get_lines_in_cart(
        &self,
        user_id: i32,
    ) -> Result<Vec<(RecipeIngredientModel, Option<IngredientModel>)>, DbErr> {
        let cart_recipe_ids = Query::select()
            .column(entity::shopping_cart::Column::RecipeId)
            .from(entity::prelude::ShoppingCart)
            .and_where(entity::shopping_cart::Column::UserId.eq(user_id))
            .to_owned();

        entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.in_subquery(cart_recipe_ids))
            .order_by_asc(entity::recipe_ingredient::Column::RecipeId)
            .order_by_asc(entity::recipe_ingredient::Column::IngredientId)
            .find_also_related(entity::prelude::Ingredient)
            .all(self.db)
            .await
    }
}
