use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::tag::TagDto;

/// Full recipe representation including its ingredient lines
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub author_id: i32,
    pub ingredients: Vec<RecipeIngredientDto>,
    /// Tags of the recipe ordered by name
    pub tags: Vec<TagDto>,
    /// Whether the recipe is in the requesting user's favorites
    pub is_favorited: bool,
    /// Whether the recipe is in the requesting user's shopping cart
    pub is_in_shopping_cart: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeIngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// Short recipe card returned after adding a recipe to the cart or favorites
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShortRecipeDto {
    pub id: i32,
    pub name: String,
    pub cooking_time: i32,
}

/// Request body for creating or updating a recipe
///
/// An update replaces every field, ingredient lines and tags included.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeWriteDto {
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub ingredients: Vec<IngredientAmountDto>,
    /// Tag IDs
    pub tags: Vec<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IngredientAmountDto {
    /// Ingredient ID
    pub id: i32,
    pub amount: i32,
}

/// Shareable short link for a recipe
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShortLinkDto {
    #[serde(rename = "short-link")]
    pub short_link: String,
}

/// Query parameters for listing recipes
///
/// Flags take `1` to keep only matching recipes and `0` to exclude them.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipeListParams {
    /// Only recipes by this author
    pub author: Option<i32>,
    /// Comma separated tag slugs, recipes carrying any of them are kept
    pub tags: Option<String>,
    /// Filter on the requesting user's favorites
    pub is_favorited: Option<u8>,
    /// Filter on the requesting user's shopping cart
    pub is_in_shopping_cart: Option<u8>,
}
