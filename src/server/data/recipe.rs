use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    db::RecipeModel,
    recipe::{NewRecipe, RecipeFilter},
};

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    /// Creates a new instance of [`RecipeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the recipe row with the provided short code
    ///
    /// Ingredient lines are not inserted, see
    /// [`RecipeIngredientRepository::create_many`](crate::server::data::recipe_ingredient::RecipeIngredientRepository::create_many).
    /// Fails with a unique constraint violation when `short_code` is already taken.
    pub async fn create_with_short_code(
        &self,
        recipe: &NewRecipe,
        short_code: Option<&str>,
    ) -> Result<RecipeModel, DbErr> {
        entity::prelude::Recipe::insert(entity::recipe::ActiveModel {
            name: ActiveValue::Set(recipe.name.clone()),
            text: ActiveValue::Set(recipe.text.clone()),
            cooking_time: ActiveValue::Set(recipe.cooking_time),
            author_id: ActiveValue::Set(recipe.author_id),
            short_code: ActiveValue::Set(short_code.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(&self, recipe_id: i32) -> Result<Option<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_short_code(
        &self,
        short_code: &str,
    ) -> Result<Option<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::ShortCode.eq(short_code))
            .one(self.db)
            .await
    }

    /// Returns true if any recipe already carries the short code
    pub async fn exists_short_code(&self, short_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::ShortCode.eq(short_code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Overwrites the name, text and cooking time of a recipe
    ///
    /// The author, creation time and short code are never written, a short code stays what
    /// it was at creation. Fails with [`DbErr::RecordNotUpdated`] if the recipe does not exist.
    pub async fn update_details(
        &self,
        recipe_id: i32,
        recipe: &NewRecipe,
    ) -> Result<RecipeModel, DbErr> {
        entity::prelude::Recipe::update(entity::recipe::ActiveModel {
            id: ActiveValue::Unchanged(recipe_id),
            name: ActiveValue::Set(recipe.name.clone()),
            text: ActiveValue::Set(recipe.text.clone()),
            cooking_time: ActiveValue::Set(recipe.cooking_time),
            ..Default::default()
        })
        .exec(self.db)
        .await
    }

    /// Get recipes matching the filter, newest first with ties ordered by name
    ///
    /// Favorite and cart filters apply to `viewer_id`. An anonymous viewer has neither
    /// favorites nor a cart, so requiring either yields nothing and excluding them is a no-op.
    pub async fn find_filtered(
        &self,
        filter: &RecipeFilter,
        viewer_id: Option<i32>,
    ) -> Result<Vec<RecipeModel>, DbErr> {
        let mut query = entity::prelude::Recipe::find();

        if let Some(author_id) = filter.author_id {
            query = query.filter(entity::recipe::Column::AuthorId.eq(author_id));
        }

        if !filter.tag_slugs.is_empty() {
            let tag_ids = Query::select()
                .column(entity::tag::Column::Id)
                .from(entity::prelude::Tag)
                .and_where(entity::tag::Column::Slug.is_in(filter.tag_slugs.iter().cloned()))
                .to_owned();
            let tagged_recipe_ids = Query::select()
                .column(entity::recipe_tag::Column::RecipeId)
                .from(entity::prelude::RecipeTag)
                .and_where(entity::recipe_tag::Column::TagId.in_subquery(tag_ids))
                .to_owned();

            query = query.filter(entity::recipe::Column::Id.in_subquery(tagged_recipe_ids));
        }

        if let Some(is_favorited) = filter.is_favorited {
            match viewer_id {
                Some(user_id) => {
                    let favorite_ids = Query::select()
                        .column(entity::favorite::Column::RecipeId)
                        .from(entity::prelude::Favorite)
                        .and_where(entity::favorite::Column::UserId.eq(user_id))
                        .to_owned();

                    query = query.filter(if is_favorited {
                        entity::recipe::Column::Id.in_subquery(favorite_ids)
                    } else {
                        entity::recipe::Column::Id.not_in_subquery(favorite_ids)
                    });
                }
                None if is_favorited => return Ok(Vec::new()),
                None => {}
            }
        }

        if let Some(is_in_shopping_cart) = filter.is_in_shopping_cart {
            match viewer_id {
                Some(user_id) => {
                    let cart_ids = Query::select()
                        .column(entity::shopping_cart::Column::RecipeId)
                        .from(entity::prelude::ShoppingCart)
                        .and_where(entity::shopping_cart::Column::UserId.eq(user_id))
                        .to_owned();

                    query = query.filter(if is_in_shopping_cart {
                        entity::recipe::Column::Id.in_subquery(cart_ids)
                    } else {
                        entity::recipe::Column::Id.not_in_subquery(cart_ids)
                    });
                }
                None if is_in_shopping_cart => return Ok(Vec::new()),
                None => {}
            }
        }

        query
            .order_by_desc(entity::recipe::Column::CreatedAt)
            .order_by_asc(entity::recipe::Column::Name)
            .all(self.db)
            .await
    }

    /// Get every recipe of the provided authors, newest first
    pub async fn find_by_author_ids(&self, author_ids: &[i32]) -> Result<Vec<RecipeModel>, DbErr> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.is_in(author_ids.iter().copied()))
            .order_by_desc(entity::recipe::Column::CreatedAt)
            .order_by_asc(entity::recipe::Column::Name)
            .all(self.db)
            .await
    }

    /// Deletes a recipe, its ingredient lines, cart and favorite entries cascade with it
    ///
    /// Returns OK regardless of recipe existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Recipe::delete_by_id(recipe_id)
            .exec(self.db)
            .await
    }
}
