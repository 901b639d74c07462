//! Fixture helpers for inserting test records.
//!
//! - `user` - recipebox users and subscriptions
//! - `recipe` - ingredients, recipes with their ingredient lines, cart and favorite entries
//! - `tag` - tags and their assignment to recipes

pub mod recipe;
pub mod tag;
pub mod user;
