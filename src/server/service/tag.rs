use sea_orm::DatabaseConnection;

use crate::{
    model::tag::TagDto,
    server::{
        data::tag::TagRepository,
        error::{tag::TagError, Error},
        model::db::TagModel,
    },
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    /// Creates a new instance of [`TagService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every tag ordered by name
    pub async fn list(&self) -> Result<Vec<TagDto>, Error> {
        let tags = TagRepository::new(self.db).find_all().await?;

        Ok(tags.into_iter().map(TagDto::from).collect())
    }

    /// Retrieves a single tag
    ///
    /// # Returns
    /// - `Ok(TagDto)` - Tag found
    /// - `Err(Error::TagError(NotFound))` - Tag does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, tag_id: i32) -> Result<TagDto, Error> {
        let tag = TagRepository::new(self.db)
            .find_by_id(tag_id)
            .await?
            .ok_or(TagError::NotFound(tag_id))?;

        Ok(tag.into())
    }
}

impl From<TagModel> for TagDto {
    fn from(tag: TagModel) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            slug: tag.slug,
        }
    }
}
