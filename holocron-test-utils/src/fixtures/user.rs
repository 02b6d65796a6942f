use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, factory::mock_user_model, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with the values of [`mock_user_model`]
    pub async fn insert_mock_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        let mock = mock_user_model(0, username);

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                username: ActiveValue::Set(mock.username),
                email: ActiveValue::Set(mock.email),
                password: ActiveValue::Set(mock.password),
                is_active: ActiveValue::Set(mock.is_active),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
