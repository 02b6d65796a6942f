use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{model::comment::CreateCommentDto, server::model::db::CommentModel};

/// Queries for the `comment` table
pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    /// Creates a new instance of [`CommentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a comment stamped with the current UTC time
    pub async fn create(&self, comment: CreateCommentDto) -> Result<CommentModel, DbErr> {
        let comment = entity::comment::ActiveModel {
            content: ActiveValue::Set(comment.content),
            user_id: ActiveValue::Set(comment.user_id),
            character_id: ActiveValue::Set(comment.character_id),
            planet_id: ActiveValue::Set(comment.planet_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        comment.insert(self.db).await
    }

    /// Gets the comments written by a user, oldest first
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<CommentModel>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::UserId.eq(user_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }
}
