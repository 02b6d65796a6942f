use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::comment::CreateCommentDto,
    server::{data::comment::CommentRepository, error::Error},
};

/// Service for user comments
pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    /// Creates a new instance of [`CommentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a comment timestamped now and returns its ID
    pub async fn create_comment(&self, comment: CreateCommentDto) -> Result<i32, Error> {
        comment.validate()?;

        let comment_repository = CommentRepository::new(self.db);

        let comment = comment_repository.create(comment).await?;

        Ok(comment.id)
    }
}
