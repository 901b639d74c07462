//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an in-memory database and session, verifying status
//! codes, bodies and headers for every API endpoint.

mod favorite;
mod ingredient;
mod recipe;
mod shopping_cart;
mod short_link;
mod subscription;
mod tag;

use recipebox_test_utils::prelude::*;

use crate::util::{body_string, TestSetupExt};
