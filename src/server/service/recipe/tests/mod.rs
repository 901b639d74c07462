
use recipebox_test_utils::prelude::*;

use crate::{
    model::recipe::{IngredientAmountDto, RecipeWriteDto},
    server::{
        error::{auth::AuthError, recipe::RecipeError, Error},
        service::{recipe::RecipeService, short_code::ShortCodeStrategy},
    },
};

fn create_dto(name: &str, ingredients: &[(i32, i32)], tags: &[i32]) -> RecipeWriteDto {
    RecipeWriteDto {
        name: name.to_string(),
        text: "Mix everything".to_string(),
        cooking_time: 20,
        ingredients: ingredients
            .iter()
            .map(|(id, amount)| IngredientAmountDto {
                id: *id,
                amount: *amount,
            })
            .collect(),
        tags: tags.to_vec(),
    }
}
