use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        ingredient::{IngredientDto, IngredientSearchParams},
    },
    server::{error::Error, model::app::AppState, service::ingredient::IngredientService},
};

pub static INGREDIENT_TAG: &str = "ingredient";

/// List ingredients, optionally filtered by name prefix
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    params(IngredientSearchParams),
    responses(
        (status = 200, description = "Matching ingredients ordered by name", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_ingredients(
    State(state): State<AppState>,
    Query(params): Query<IngredientSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let ingredients = IngredientService::new(&state.db)
        .search(params.name.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(ingredients)))
}
