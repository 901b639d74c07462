//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, organized by
//! table. Every repository is generic over `ConnectionTrait` so it can run against a pooled
//! connection or inside a transaction.

pub mod favorite;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod recipe_tag;
pub mod shopping_cart;
pub mod subscription;
pub mod tag;
pub mod user;
