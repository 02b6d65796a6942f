use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn comment<'a>(&'a self) -> CommentFixtures<'a> {
        CommentFixtures { setup: self }
    }
}

pub struct CommentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CommentFixtures<'a> {
    /// Insert a comment written now, optionally about a character and/or planet
    pub async fn insert_comment(
        &self,
        user_id: i32,
        content: &str,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<entity::comment::Model, TestError> {
        Ok(
            entity::prelude::Comment::insert(entity::comment::ActiveModel {
                content: ActiveValue::Set(content.to_string()),
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                planet_id: ActiveValue::Set(planet_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
