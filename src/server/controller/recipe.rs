use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        recipe::{RecipeDto, RecipeListParams, RecipeWriteDto, ShortLinkDto},
    },
    server::{
        controller::util::{
            get_user::{get_optional_user_id_from_session, get_user_id_from_session},
            public_url::build_short_link,
        },
        error::Error,
        model::{app::AppState, recipe::RecipeFilter},
        service::{recipe::RecipeService, short_code::ShortCodeService},
    },
};

pub static RECIPE_TAG: &str = "recipe";

/// Create a recipe authored by the logged in user
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    request_body = RecipeWriteDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDto),
        (status = 400, description = "Invalid recipe payload", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RecipeWriteDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&state, &session).await?;

    let recipe = RecipeService::new(&state.db)
        .create(user_id, payload, state.short_code_strategy)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// List recipes, newest first
///
/// Favorite and shopping cart filters apply to the logged in user; anonymous requests
/// filtering on them with `1` receive an empty list.
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    params(RecipeListParams),
    responses(
        (status = 200, description = "Matching recipes", body = Vec<RecipeDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RecipeListParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = RecipeFilter::try_from(params)?;
    let viewer_id = get_optional_user_id_from_session(&state, &session).await?;

    let recipes = RecipeService::new(&state.db)
        .list(&filter, viewer_id)
        .await?;

    Ok((StatusCode::OK, Json(recipes)))
}

/// Get a recipe with its ingredients
///
/// Favorite and shopping cart flags reflect the logged in user and are false for anonymous
/// requests.
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe found", body = RecipeDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer_id = get_optional_user_id_from_session(&state, &session).await?;

    let recipe = RecipeService::new(&state.db)
        .get(recipe_id, viewer_id)
        .await?;

    Ok((StatusCode::OK, Json(recipe)))
}

/// Replace the contents of a recipe, only its author may do so
///
/// Ingredient lines and tags are replaced as a whole. The short link stays the same.
#[utoipa::path(
    patch,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    request_body = RecipeWriteDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeDto),
        (status = 400, description = "Invalid recipe payload", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author of the recipe", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
    Json(payload): Json<RecipeWriteDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&state, &session).await?;

    let recipe = RecipeService::new(&state.db)
        .update(recipe_id, user_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(recipe)))
}

/// Delete a recipe, only its author may do so
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author of the recipe", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&state, &session).await?;

    RecipeService::new(&state.db)
        .delete(recipe_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the absolute short link of a recipe
///
/// # Responses
/// - 200 (OK): `{"short-link": "<scheme>://<host>/s/<code>/"}`
/// - 400 (Bad Request): The request carries no `Host` header
/// - 404 (Not Found): Recipe does not exist
#[utoipa::path(
    get,
    path = "/api/recipes/{id}/get-link",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Short link of the recipe", body = ShortLinkDto),
        (status = 400, description = "Missing Host header", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_link(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let code = ShortCodeService::new(&state.db, state.short_code_strategy)
        .code_for_recipe_id(recipe_id)
        .await?;

    let short_link = build_short_link(&headers, state.secure_proxy_ssl, &code)?;

    Ok((StatusCode::OK, Json(ShortLinkDto { short_link })))
}
