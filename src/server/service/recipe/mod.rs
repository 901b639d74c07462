//! Recipe service.
//!
//! Creation and update (validation, ingredient lines, tags and short code in one
//! transaction), retrieval and filtered listing with the viewer's favorite and cart flags,
//! and author-only deletion.

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        recipe::{RecipeDto, RecipeIngredientDto, RecipeWriteDto},
        tag::TagDto,
    },
    server::{
        data::{
            favorite::FavoriteRepository, ingredient::IngredientRepository,
            recipe::RecipeRepository, recipe_ingredient::RecipeIngredientRepository,
            recipe_tag::RecipeTagRepository, shopping_cart::ShoppingCartRepository,
            tag::TagRepository,
        },
        error::{auth::AuthError, recipe::RecipeError, Error},
        model::{
            db::RecipeModel,
            recipe::{
                IngredientLine, NewRecipe, NewRecipeIngredient, RecipeFilter, COOKING_TIME_MAX,
                COOKING_TIME_MIN, INGREDIENT_AMOUNT_MAX, INGREDIENT_AMOUNT_MIN,
                RECIPE_NAME_MAX_LENGTH,
            },
        },
        service::short_code::{ShortCodeService, ShortCodeStrategy},
    },
};

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of [`RecipeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a recipe with its ingredient lines, tags and short code.
    ///
    /// The recipe row, its short code, its ingredient lines and its tags are written in a
    /// single transaction, nothing is persisted if any step fails.
    ///
    /// # Arguments
    /// - `author_id` - ID of the user creating the recipe
    /// - `recipe` - Recipe payload from the request
    /// - `strategy` - Short code strategy of this deployment
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - The created recipe as seen by its author
    /// - `Err(Error::RecipeError)` - Payload failed validation or names an unknown ingredient
    ///   or tag
    /// - `Err(Error::ShortCodeError(CapacityExhausted))` - No unused short code could be drawn
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        author_id: i32,
        recipe: RecipeWriteDto,
        strategy: ShortCodeStrategy,
    ) -> Result<RecipeDto, Error> {
        let new_recipe = validate_recipe(author_id, recipe)?;

        let txn = self.db.begin().await?;

        ensure_references_exist(&txn, &new_recipe).await?;

        let recipe = ShortCodeService::new(&txn, strategy)
            .create_recipe(&new_recipe)
            .await?;
        RecipeIngredientRepository::new(&txn)
            .create_many(recipe.id, &new_recipe.ingredients)
            .await?;
        RecipeTagRepository::new(&txn)
            .create_many(recipe.id, &new_recipe.tag_ids)
            .await?;

        txn.commit().await?;

        tracing::debug!("User ID {} created recipe ID {}", author_id, recipe.id);

        self.get(recipe.id, Some(author_id)).await
    }

    /// Replaces the contents of a recipe on behalf of its author.
    ///
    /// Name, text, cooking time, ingredient lines and tags are overwritten in one
    /// transaction. The short code is assigned at creation only and is left untouched.
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - The updated recipe as seen by its author
    /// - `Err(Error::RecipeError(NotFound))` - Recipe does not exist
    /// - `Err(Error::AuthError(NotAuthor))` - `user_id` did not author the recipe
    /// - `Err(Error::RecipeError)` - Payload failed validation or names an unknown ingredient
    ///   or tag
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(
        &self,
        recipe_id: i32,
        user_id: i32,
        recipe: RecipeWriteDto,
    ) -> Result<RecipeDto, Error> {
        let new_recipe = validate_recipe(user_id, recipe)?;

        let txn = self.db.begin().await?;

        let existing = RecipeRepository::new(&txn)
            .find_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::NotFound(recipe_id))?;
        if existing.author_id != user_id {
            return Err(AuthError::NotAuthor { user_id, recipe_id }.into());
        }

        ensure_references_exist(&txn, &new_recipe).await?;

        RecipeRepository::new(&txn)
            .update_details(recipe_id, &new_recipe)
            .await?;

        let recipe_ingredient_repo = RecipeIngredientRepository::new(&txn);
        recipe_ingredient_repo.delete_by_recipe_id(recipe_id).await?;
        recipe_ingredient_repo
            .create_many(recipe_id, &new_recipe.ingredients)
            .await?;

        let recipe_tag_repo = RecipeTagRepository::new(&txn);
        recipe_tag_repo.delete_by_recipe_id(recipe_id).await?;
        recipe_tag_repo
            .create_many(recipe_id, &new_recipe.tag_ids)
            .await?;

        txn.commit().await?;

        tracing::debug!("User ID {} updated recipe ID {}", user_id, recipe_id);

        self.get(recipe_id, Some(user_id)).await
    }

    /// Retrieves a recipe with its ingredient lines and tags.
    ///
    /// `viewer_id` is the session user, if any; the favorite and cart flags are false for
    /// anonymous viewers.
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - Recipe found
    /// - `Err(Error::RecipeError(NotFound))` - Recipe does not exist
    /// - `Err(Error::InternalError)` - A line references a missing ingredient or tag
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, recipe_id: i32, viewer_id: Option<i32>) -> Result<RecipeDto, Error> {
        let recipe = RecipeRepository::new(self.db)
            .find_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::NotFound(recipe_id))?;

        self.to_dtos(vec![recipe], viewer_id)
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!("Failed to build recipe ID {}", recipe_id))
            })
    }

    /// Lists recipes matching the filter, newest first.
    ///
    /// Favorite and cart filters and flags apply to `viewer_id`.
    pub async fn list(
        &self,
        filter: &RecipeFilter,
        viewer_id: Option<i32>,
    ) -> Result<Vec<RecipeDto>, Error> {
        let recipes = RecipeRepository::new(self.db)
            .find_filtered(filter, viewer_id)
            .await?;

        self.to_dtos(recipes, viewer_id).await
    }

    /// Deletes a recipe on behalf of `user_id`.
    ///
    /// Ingredient lines, tags, cart entries and favorites of the recipe cascade with it.
    ///
    /// # Returns
    /// - `Ok(())` - Recipe deleted
    /// - `Err(Error::RecipeError(NotFound))` - Recipe does not exist
    /// - `Err(Error::AuthError(NotAuthor))` - `user_id` did not author the recipe
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, recipe_id: i32, user_id: i32) -> Result<(), Error> {
        let recipe_repo = RecipeRepository::new(self.db);

        let recipe = recipe_repo
            .find_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::NotFound(recipe_id))?;

        if recipe.author_id != user_id {
            return Err(AuthError::NotAuthor { user_id, recipe_id }.into());
        }

        recipe_repo.delete(recipe_id).await?;

        tracing::debug!("User ID {} deleted recipe ID {}", user_id, recipe_id);

        Ok(())
    }

    /// Builds DTOs for the recipes, keeping their order
    ///
    /// Lines, tags and the viewer's flags are loaded with one query each regardless of the
    /// number of recipes.
    async fn to_dtos(
        &self,
        recipes: Vec<RecipeModel>,
        viewer_id: Option<i32>,
    ) -> Result<Vec<RecipeDto>, Error> {
        if recipes.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<i32> = recipes.iter().map(|recipe| recipe.id).collect();

        let mut ingredients_by_recipe: HashMap<i32, Vec<RecipeIngredientDto>> = HashMap::new();
        for (line, ingredient) in RecipeIngredientRepository::new(self.db)
            .get_lines_by_recipe_ids(&recipe_ids)
            .await?
        {
            let line = IngredientLine::from_joined(line, ingredient)?;
            ingredients_by_recipe
                .entry(line.recipe_id)
                .or_default()
                .push(RecipeIngredientDto {
                    id: line.ingredient_id,
                    name: line.name,
                    measurement_unit: line.measurement_unit,
                    amount: line.amount,
                });
        }

        let mut tags_by_recipe: HashMap<i32, Vec<TagDto>> = HashMap::new();
        for (link, tag) in RecipeTagRepository::new(self.db)
            .get_tags_by_recipe_ids(&recipe_ids)
            .await?
        {
            let tag = tag.ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find tag ID {} referenced by recipe ID {}",
                    link.tag_id, link.recipe_id
                ))
            })?;
            tags_by_recipe
                .entry(link.recipe_id)
                .or_default()
                .push(tag.into());
        }

        let (favorited, in_cart): (HashSet<i32>, HashSet<i32>) = match viewer_id {
            Some(user_id) => (
                FavoriteRepository::new(self.db)
                    .get_recipe_ids_by_user_id(user_id)
                    .await?
                    .into_iter()
                    .collect(),
                ShoppingCartRepository::new(self.db)
                    .get_recipe_ids_by_user_id(user_id)
                    .await?
                    .into_iter()
                    .collect(),
            ),
            None => (HashSet::new(), HashSet::new()),
        };

        Ok(recipes
            .into_iter()
            .map(|recipe| {
                let mut tags = tags_by_recipe.remove(&recipe.id).unwrap_or_default();
                tags.sort_by(|a, b| a.name.cmp(&b.name));

                RecipeDto {
                    id: recipe.id,
                    name: recipe.name,
                    text: recipe.text,
                    cooking_time: recipe.cooking_time,
                    author_id: recipe.author_id,
                    ingredients: ingredients_by_recipe
                        .remove(&recipe.id)
                        .unwrap_or_default(),
                    tags,
                    is_favorited: favorited.contains(&recipe.id),
                    is_in_shopping_cart: in_cart.contains(&recipe.id),
                    created_at: recipe.created_at,
                }
            })
            .collect())
    }
}

/// Fails with the first ingredient or tag of the recipe that does not exist
async fn ensure_references_exist<C: ConnectionTrait>(
    db: &C,
    recipe: &NewRecipe,
) -> Result<(), Error> {
    let ingredient_ids: Vec<i32> = recipe
        .ingredients
        .iter()
        .map(|line| line.ingredient_id)
        .collect();
    let known_ingredient_ids: HashSet<i32> = IngredientRepository::new(db)
        .find_by_ids(&ingredient_ids)
        .await?
        .into_iter()
        .map(|ingredient| ingredient.id)
        .collect();
    if let Some(unknown_id) = ingredient_ids
        .iter()
        .find(|id| !known_ingredient_ids.contains(*id))
    {
        return Err(RecipeError::UnknownIngredient(*unknown_id).into());
    }

    let known_tag_ids: HashSet<i32> = TagRepository::new(db)
        .find_by_ids(&recipe.tag_ids)
        .await?
        .into_iter()
        .map(|tag| tag.id)
        .collect();
    if let Some(unknown_id) = recipe.tag_ids.iter().find(|id| !known_tag_ids.contains(*id)) {
        return Err(RecipeError::UnknownTag(*unknown_id).into());
    }

    Ok(())
}

/// Checks a recipe payload against the field bounds
///
/// Ingredient and tag existence needs the database and is checked by [`RecipeService::create`]
/// and [`RecipeService::update`].
pub fn validate_recipe(
    author_id: i32,
    recipe: RecipeWriteDto,
) -> Result<NewRecipe, RecipeError> {
    let name = recipe.name.trim();
    if name.is_empty() || name.chars().count() > RECIPE_NAME_MAX_LENGTH {
        return Err(RecipeError::InvalidName {
            max: RECIPE_NAME_MAX_LENGTH,
        });
    }

    if !(COOKING_TIME_MIN..=COOKING_TIME_MAX).contains(&recipe.cooking_time) {
        return Err(RecipeError::InvalidCookingTime {
            value: recipe.cooking_time,
            min: COOKING_TIME_MIN,
            max: COOKING_TIME_MAX,
        });
    }

    if recipe.ingredients.is_empty() {
        return Err(RecipeError::NoIngredients);
    }

    let mut seen = HashSet::new();
    let mut ingredients = Vec::with_capacity(recipe.ingredients.len());
    for line in recipe.ingredients {
        if !seen.insert(line.id) {
            return Err(RecipeError::DuplicateIngredient(line.id));
        }

        if !(INGREDIENT_AMOUNT_MIN..=INGREDIENT_AMOUNT_MAX).contains(&line.amount) {
            return Err(RecipeError::InvalidAmount {
                ingredient_id: line.id,
                amount: line.amount,
                min: INGREDIENT_AMOUNT_MIN,
                max: INGREDIENT_AMOUNT_MAX,
            });
        }

        ingredients.push(NewRecipeIngredient {
            ingredient_id: line.id,
            amount: line.amount,
        });
    }

    if recipe.tags.is_empty() {
        return Err(RecipeError::NoTags);
    }

    let mut seen_tags = HashSet::new();
    if let Some(duplicate) = recipe.tags.iter().find(|tag_id| !seen_tags.insert(**tag_id)) {
        return Err(RecipeError::DuplicateTag(*duplicate));
    }

    Ok(NewRecipe {
        name: name.to_string(),
        text: recipe.text,
        cooking_time: recipe.cooking_time,
        author_id,
        ingredients,
        tag_ids: recipe.tags,
    })
}
