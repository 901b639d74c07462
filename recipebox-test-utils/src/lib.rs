//! Shared test harness for the recipebox workspace.
//!
//! Provides an in-memory SQLite database and session, table creation macros and fixture
//! helpers for inserting users, ingredients, recipes and cart entries.

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{test_setup_with_recipe_tables, test_setup_with_tables, TestError, TestSetup};
}
