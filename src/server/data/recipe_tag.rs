use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::{RecipeTagModel, TagModel};

pub struct RecipeTagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeTagRepository<'a, C> {
    /// Creates a new instance of [`RecipeTagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Attaches the tags to a recipe
    pub async fn create_many(&self, recipe_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let models = tag_ids.iter().map(|tag_id| entity::recipe_tag::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            tag_id: ActiveValue::Set(*tag_id),
        });

        entity::prelude::RecipeTag::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Detaches every tag from a recipe
    pub async fn delete_by_recipe_id(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RecipeTag::delete_many()
            .filter(entity::recipe_tag::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await
    }

    /// Get the tags of several recipes joined with the tag they reference
    pub async fn get_tags_by_recipe_ids(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<(RecipeTagModel, Option<TagModel>)>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RecipeTag::find()
            .filter(entity::recipe_tag::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .order_by_asc(entity::recipe_tag::Column::RecipeId)
            .order_by_asc(entity::recipe_tag::Column::TagId)
            .find_also_related(entity::prelude::Tag)
            .all(self.db)
            .await
    }
}
