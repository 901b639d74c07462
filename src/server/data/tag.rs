use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::TagModel;

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    /// Creates a new instance of [`TagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get every tag ordered by name
    pub async fn find_all(&self) -> Result<Vec<TagModel>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, tag_id: i32) -> Result<Option<TagModel>, DbErr> {
        entity::prelude::Tag::find_by_id(tag_id).one(self.db).await
    }

    /// Get tags for the provided IDs, IDs without a matching tag are skipped
    pub async fn find_by_ids(&self, tag_ids: &[i32]) -> Result<Vec<TagModel>, DbErr> {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(tag_ids.iter().copied()))
            .all(self.db)
            .await
    }
}
