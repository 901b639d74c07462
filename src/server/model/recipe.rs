//! Recipe domain types shared between the data and service layers.

use crate::{
    model::recipe::RecipeListParams,
    server::{
        error::{recipe::RecipeError, Error},
        model::db::{IngredientModel, RecipeIngredientModel},
    },
};

/// Lower bound for an ingredient amount in a recipe
pub const INGREDIENT_AMOUNT_MIN: i32 = 1;
/// Upper bound for an ingredient amount in a recipe
pub const INGREDIENT_AMOUNT_MAX: i32 = 32000;
/// Lower bound for a recipe's cooking time in minutes
pub const COOKING_TIME_MIN: i32 = 1;
/// Upper bound for a recipe's cooking time in minutes
pub const COOKING_TIME_MAX: i32 = 32000;
/// Maximum recipe name length in characters
pub const RECIPE_NAME_MAX_LENGTH: usize = 256;

/// A validated recipe ready to be persisted
#[derive(Clone, Debug)]
pub struct NewRecipe {
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub author_id: i32,
    pub ingredients: Vec<NewRecipeIngredient>,
    pub tag_ids: Vec<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewRecipeIngredient {
    pub ingredient_id: i32,
    pub amount: i32,
}

/// One ingredient line of a recipe joined with the ingredient it references
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngredientLine {
    pub recipe_id: i32,
    pub ingredient_id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl IngredientLine {
    /// Builds a line from a recipe ingredient row joined with its ingredient
    ///
    /// A missing ingredient means the foreign key between the two tables was not
    /// enforced, which is reported as an internal error rather than skipped.
    pub fn from_joined(
        line: RecipeIngredientModel,
        ingredient: Option<IngredientModel>,
    ) -> Result<Self, Error> {
        let ingredient = ingredient.ok_or_else(|| {
            Error::InternalError(format!(
                "Failed to find ingredient ID {} referenced by recipe ID {}",
                line.ingredient_id, line.recipe_id
            ))
        })?;

        Ok(Self {
            recipe_id: line.recipe_id,
            ingredient_id: ingredient.id,
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
            amount: line.amount,
        })
    }
}

/// Recipe list filters, every set field must hold for a recipe to be listed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub author_id: Option<i32>,
    /// Recipes carrying any of these tag slugs, no restriction when empty
    pub tag_slugs: Vec<String>,
    pub is_favorited: Option<bool>,
    pub is_in_shopping_cart: Option<bool>,
}

impl TryFrom<RecipeListParams> for RecipeFilter {
    type Error = RecipeError;

    fn try_from(params: RecipeListParams) -> Result<Self, Self::Error> {
        let tag_slugs = params
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            author_id: params.author,
            tag_slugs,
            is_favorited: parse_flag("is_favorited", params.is_favorited)?,
            is_in_shopping_cart: parse_flag("is_in_shopping_cart", params.is_in_shopping_cart)?,
        })
    }
}

fn parse_flag(name: &'static str, value: Option<u8>) -> Result<Option<bool>, RecipeError> {
    match value {
        None => Ok(None),
        Some(0) => Ok(Some(false)),
        Some(1) => Ok(Some(true)),
        Some(value) => Err(RecipeError::InvalidFilter { name, value }),
    }
}
