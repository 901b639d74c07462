//! SeaORM entities for the recipebox database schema.

pub mod prelude;

pub mod favorite;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod recipe_tag;
pub mod recipebox_user;
pub mod shopping_cart;
pub mod subscription;
pub mod tag;
