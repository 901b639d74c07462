use sea_orm::DatabaseConnection;

use crate::{
    model::recipe::ShortRecipeDto,
    server::{
        data::{favorite::FavoriteRepository, recipe::RecipeRepository},
        error::{favorite::FavoriteError, is_unique_violation, recipe::RecipeError, Error},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a recipe to the user's favorites.
    ///
    /// # Returns
    /// - `Ok(ShortRecipeDto)` - Short card of the recipe
    /// - `Err(Error::RecipeError(NotFound))` - Recipe does not exist
    /// - `Err(Error::FavoriteError(DuplicateEntry))` - Recipe is already a favorite
    pub async fn add(&self, user_id: i32, recipe_id: i32) -> Result<ShortRecipeDto, Error> {
        let recipe = RecipeRepository::new(self.db)
            .find_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::NotFound(recipe_id))?;

        match FavoriteRepository::new(self.db)
            .create(user_id, recipe_id)
            .await
        {
            Ok(_) => Ok(ShortRecipeDto {
                id: recipe.id,
                name: recipe.name,
                cooking_time: recipe.cooking_time,
            }),
            Err(err) if is_unique_violation(&err) => {
                Err(FavoriteError::DuplicateEntry { recipe_id }.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a recipe from the user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(Error::RecipeError(NotFound))` - Recipe does not exist
    /// - `Err(Error::FavoriteError(NotFavorited))` - Recipe is not a favorite of the user
    pub async fn remove(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        if RecipeRepository::new(self.db)
            .find_by_id(recipe_id)
            .await?
            .is_none()
        {
            return Err(RecipeError::NotFound(recipe_id).into());
        }

        let result = FavoriteRepository::new(self.db)
            .delete(user_id, recipe_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(FavoriteError::NotFavorited { recipe_id }.into());
        }

        Ok(())
    }
}
