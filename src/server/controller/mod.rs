//! HTTP controller endpoints for the recipebox web API.
//!
//! Axum handlers for recipes, the shopping cart and its export, short links, favorites,
//! subscriptions and ingredient search. Controllers resolve the session user, call into
//! services and map results to HTTP responses. Endpoints are documented with utoipa.

pub mod favorite;
pub mod ingredient;
pub mod recipe;
pub mod shopping_cart;
pub mod short_link;
pub mod subscription;
pub mod tag;
pub mod util;
