use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Recipe ID {recipe_id} is already in the shopping cart")]
    DuplicateEntry { recipe_id: i32 },
    #[error("Recipe ID {recipe_id} is not in the shopping cart")]
    NotInCart { recipe_id: i32 },
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::DuplicateEntry { .. } => {
                error_response(StatusCode::BAD_REQUEST, "Recipe is already in the shopping cart.")
            }
            Self::NotInCart { .. } => {
                error_response(StatusCode::NOT_FOUND, "Recipe is not in the shopping cart.")
            }
        }
    }
}
