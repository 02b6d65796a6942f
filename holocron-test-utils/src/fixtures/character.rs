use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, factory::mock_character_model, TestContext};

impl TestContext {
    pub fn character<'a>(&'a self) -> CharacterFixtures<'a> {
        CharacterFixtures { setup: self }
    }
}

pub struct CharacterFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CharacterFixtures<'a> {
    /// Insert a character with the values of [`mock_character_model`]
    pub async fn insert_mock_character(
        &self,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        let mock = mock_character_model(0, name);

        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(mock.name),
                hair_color: ActiveValue::Set(mock.hair_color),
                eye_color: ActiveValue::Set(mock.eye_color),
                gender: ActiveValue::Set(mock.gender),
                species: ActiveValue::Set(mock.species),
                height: ActiveValue::Set(mock.height),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
