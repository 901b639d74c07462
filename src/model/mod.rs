//! Data transfer objects exchanged with API clients.

pub mod api;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
