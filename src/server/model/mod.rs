//! Server application models and type definitions.
//!
//! This module contains application state, database model type aliases, session data
//! structures and the domain types passed between the data, service and controller layers.

pub mod app;
pub mod db;
pub mod recipe;
pub mod session;
pub mod shopping_list;
