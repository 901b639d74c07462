use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum ShortCodeError {
    /// The code is not well formed for the configured strategy
    #[error("Short code {0:?} is not valid")]
    InvalidCode(String),
    /// The code is well formed but no recipe carries it
    #[error("No recipe found for short code {0:?}")]
    NotFound(String),
    #[error("Failed to find an unused short code after {attempts} attempts")]
    CapacityExhausted { attempts: usize },
    #[error("Recipe ID {0} has no stored short code")]
    Unassigned(i32),
    #[error("Request is missing a Host header, cannot build an absolute short link")]
    MissingHost,
}

impl IntoResponse for ShortCodeError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCode(_) | Self::NotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "Recipe not found")
            }
            Self::MissingHost => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, "Missing Host header")
            }
            Self::CapacityExhausted { .. } | Self::Unassigned(_) => {
                InternalServerError(self).into_response()
            }
        }
    }
}
