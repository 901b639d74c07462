mod remove;

use recipebox_test_utils::prelude::*;

use crate::server::{
    error::{cart::CartError, recipe::RecipeError, Error},
    service::shopping_cart::ShoppingCartService,
};
