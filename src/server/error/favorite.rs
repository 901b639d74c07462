use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("Recipe ID {recipe_id} is already in favorites")]
    DuplicateEntry { recipe_id: i32 },
    #[error("Recipe ID {recipe_id} is not in favorites")]
    NotFavorited { recipe_id: i32 },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::DuplicateEntry { .. } => {
                error_response(StatusCode::BAD_REQUEST, "Recipe is already in favorites.")
            }
            Self::NotFavorited { .. } => {
                error_response(StatusCode::NOT_FOUND, "Recipe is not in favorites.")
            }
        }
    }
}
