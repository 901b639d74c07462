//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/recipes` - List recipes by author, tags, favorites and shopping cart
/// - `POST /api/recipes` - Create a recipe
/// - `GET /api/recipes/{id}` - Get a recipe
/// - `PATCH /api/recipes/{id}` - Update an own recipe
/// - `DELETE /api/recipes/{id}` - Delete an own recipe
/// - `GET /api/recipes/{id}/get-link` - Get the short link of a recipe
/// - `POST /api/recipes/{id}/shopping_cart` - Add a recipe to the shopping cart
/// - `DELETE /api/recipes/{id}/shopping_cart` - Remove a recipe from the shopping cart
/// - `GET /api/recipes/download_shopping_cart` - Download the aggregated shopping list
/// - `POST /api/recipes/{id}/favorite` - Add a recipe to favorites
/// - `DELETE /api/recipes/{id}/favorite` - Remove a recipe from favorites
/// - `GET /api/users/subscriptions` - List followed users with their newest recipes
/// - `POST /api/users/{id}/subscribe` - Subscribe to a user
/// - `DELETE /api/users/{id}/subscribe` - Unsubscribe from a user
/// - `GET /api/ingredients` - Search ingredients by name prefix
/// - `GET /api/tags` - List tags
/// - `GET /api/tags/{id}` - Get a tag
/// - `GET /s/{code}/` - Redirect a short link to its recipe
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Recipebox", description = "Recipebox API"), tags(
        (name = controller::recipe::RECIPE_TAG, description = "Recipe API routes"),
        (name = controller::shopping_cart::SHOPPING_CART_TAG, description = "Shopping cart API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
        (name = controller::subscription::SUBSCRIPTION_TAG, description = "Subscription API routes"),
        (name = controller::ingredient::INGREDIENT_TAG, description = "Ingredient API routes"),
        (name = controller::tag::TAG_TAG, description = "Tag API routes"),
        (name = controller::short_link::SHORT_LINK_TAG, description = "Recipe short links"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::recipe::list_recipes,
            controller::recipe::create_recipe
        ))
        .routes(routes!(
            controller::recipe::get_recipe,
            controller::recipe::update_recipe,
            controller::recipe::delete_recipe
        ))
        .routes(routes!(controller::recipe::get_link))
        .routes(routes!(
            controller::shopping_cart::add_to_shopping_cart,
            controller::shopping_cart::remove_from_shopping_cart
        ))
        .routes(routes!(controller::shopping_cart::download_shopping_cart))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .routes(routes!(controller::subscription::list_subscriptions))
        .routes(routes!(
            controller::subscription::subscribe,
            controller::subscription::unsubscribe
        ))
        .routes(routes!(controller::ingredient::search_ingredients))
        .routes(routes!(controller::tag::list_tags))
        .routes(routes!(controller::tag::get_tag))
        .routes(routes!(controller::short_link::redirect_short_link))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
