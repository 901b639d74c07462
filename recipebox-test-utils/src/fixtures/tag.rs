use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    /// Insert a tag with the provided name & slug
    pub async fn insert_mock_tag(
        &self,
        name: &str,
        slug: &str,
    ) -> Result<entity::tag::Model, TestError> {
        Ok(entity::prelude::Tag::insert(entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.state.db)
        .await?)
    }

    /// Attach a tag to a recipe
    pub async fn insert_recipe_tag(
        &self,
        recipe_id: i32,
        tag_id: i32,
    ) -> Result<entity::recipe_tag::Model, TestError> {
        Ok(
            entity::prelude::RecipeTag::insert(entity::recipe_tag::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                tag_id: ActiveValue::Set(tag_id),
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }
}
