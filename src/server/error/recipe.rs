use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe ID {0} not found")]
    NotFound(i32),
    #[error("Recipe name must be between 1 and {max} characters")]
    InvalidName { max: usize },
    #[error("Recipe must list at least one ingredient")]
    NoIngredients,
    #[error("Ingredient ID {0} is listed more than once")]
    DuplicateIngredient(i32),
    #[error("Ingredient ID {0} does not exist")]
    UnknownIngredient(i32),
    #[error("Amount {amount} for ingredient ID {ingredient_id} must be between {min} and {max}")]
    InvalidAmount {
        ingredient_id: i32,
        amount: i32,
        min: i32,
        max: i32,
    },
    #[error("Cooking time {value} must be between {min} and {max}")]
    InvalidCookingTime { value: i32, min: i32, max: i32 },
    #[error("Recipe must carry at least one tag")]
    NoTags,
    #[error("Tag ID {0} is listed more than once")]
    DuplicateTag(i32),
    #[error("Tag ID {0} does not exist")]
    UnknownTag(i32),
    #[error("Filter {name} must be 0 or 1, got {value}")]
    InvalidFilter { name: &'static str, value: u8 },
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Recipe not found"),
            err => error_response(StatusCode::BAD_REQUEST, err.to_string()),
        }
    }
}
