
use recipebox_test_utils::prelude::*;

use crate::server::{
    error::{short_code::ShortCodeError, Error},
    model::recipe::NewRecipe,
    service::short_code::{ShortCodeService, ShortCodeStrategy},
};

fn new_recipe(author_id: i32, name: &str) -> NewRecipe {
    NewRecipe {
        name: name.to_string(),
        text: "Mix and bake".to_string(),
        cooking_time: 40,
        author_id,
        ingredients: Vec::new(),
        tag_ids: Vec::new(),
    }
}
