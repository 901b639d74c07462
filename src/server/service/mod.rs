//! Service layer for business logic.
//!
//! Services coordinate repositories for one request: recipe creation and retrieval,
//! shopping cart membership and aggregation, short code generation and resolution,
//! favorites, subscriptions and ingredient search.

pub mod favorite;
pub mod ingredient;
pub mod recipe;
pub mod shopping_cart;
pub mod short_code;
pub mod subscription;
pub mod tag;
pub mod user;
