//! Shopping cart service.
//!
//! Cart membership (add/remove) and the aggregation of every ingredient across the
//! recipes in a user's cart into a single [`ShoppingList`].

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::recipe::ShortRecipeDto,
    server::{
        data::{
            recipe::RecipeRepository, recipe_ingredient::RecipeIngredientRepository,
            shopping_cart::ShoppingCartRepository,
        },
        error::{cart::CartError, is_unique_violation, recipe::RecipeError, Error},
        model::{
            recipe::IngredientLine,
            shopping_list::{AggregatedLine, ShoppingList},
        },
    },
};

pub struct ShoppingCartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingCartService<'a> {
    /// Creates a new instance of [`ShoppingCartService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a recipe to the user's shopping cart.
    ///
    /// # Arguments
    /// - `user_id` - ID of the cart owner
    /// - `recipe_id` - ID of the recipe to add
    ///
    /// # Returns
    /// - `Ok(ShortRecipeDto)` - Short card of the added recipe
    /// - `Err(Error::RecipeError(NotFound))` - Recipe does not exist
    /// - `Err(Error::CartError(DuplicateEntry))` - Recipe is already in the cart
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add(&self, user_id: i32, recipe_id: i32) -> Result<ShortRecipeDto, Error> {
        let recipe = RecipeRepository::new(self.db)
            .find_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::NotFound(recipe_id))?;

        // The composite primary key rejects concurrent duplicate adds as well
        match ShoppingCartRepository::new(self.db)
            .create(user_id, recipe_id)
            .await
        {
            Ok(_) => Ok(ShortRecipeDto {
                id: recipe.id,
                name: recipe.name,
                cooking_time: recipe.cooking_time,
            }),
            Err(err) if is_unique_violation(&err) => {
                Err(CartError::DuplicateEntry { recipe_id }.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a recipe from the user's shopping cart.
    ///
    /// # Returns
    /// - `Ok(())` - Recipe removed
    /// - `Err(Error::RecipeError(NotFound))` - Recipe does not exist
    /// - `Err(Error::CartError(NotInCart))` - Recipe exists but is not in the cart
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        if RecipeRepository::new(self.db)
            .find_by_id(recipe_id)
            .await?
            .is_none()
        {
            return Err(RecipeError::NotFound(recipe_id).into());
        }

        let result = ShoppingCartRepository::new(self.db)
            .delete(user_id, recipe_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(CartError::NotInCart { recipe_id }.into());
        }

        Ok(())
    }

    /// Builds the aggregated shopping list for the user's cart.
    ///
    /// Fetches the ingredient lines of every recipe in the cart with one query and sums the
    /// amounts per ingredient.
    ///
    /// # Returns
    /// - `Ok(ShoppingList)` - Aggregated lines ordered by ingredient name then unit, empty
    ///   for an empty cart
    /// - `Err(Error::InternalError)` - A recipe line references an ingredient that does not
    ///   exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn aggregate(&self, user_id: i32) -> Result<ShoppingList, Error> {
        let lines = RecipeIngredientRepository::new(self.db)
            .get_lines_in_cart(user_id)
            .await?
            .into_iter()
            .map(|(line, ingredient)| IngredientLine::from_joined(line, ingredient))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(aggregate_lines(lines))
    }
}

/// Sums ingredient lines per ingredient ID
///
/// Totals are accumulated in `i64`, the result is ordered by ingredient name with ties
/// broken by measurement unit.
pub fn aggregate_lines<I>(lines: I) -> ShoppingList
where
    I: IntoIterator<Item = IngredientLine>,
{
    let mut totals: HashMap<i32, AggregatedLine> = HashMap::new();

    for line in lines {
        totals
            .entry(line.ingredient_id)
            .or_insert_with(|| AggregatedLine {
                ingredient_id: line.ingredient_id,
                ingredient_name: line.name.clone(),
                measurement_unit: line.measurement_unit.clone(),
                total_amount: 0,
            })
            .total_amount += i64::from(line.amount);
    }

    let mut aggregated: Vec<AggregatedLine> = totals.into_values().collect();
    aggregated.sort_by(|a, b| {
        a.ingredient_name
            .cmp(&b.ingredient_name)
            .then_with(|| a.measurement_unit.cmp(&b.measurement_unit))
            .then_with(|| a.ingredient_id.cmp(&b.ingredient_id))
    });

    ShoppingList(aggregated)
}
