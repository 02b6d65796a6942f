use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, factory::mock_planet_model, TestContext};

impl TestContext {
    pub fn planet<'a>(&'a self) -> PlanetFixtures<'a> {
        PlanetFixtures { setup: self }
    }
}

pub struct PlanetFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PlanetFixtures<'a> {
    /// Insert a planet with the values of [`mock_planet_model`]
    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        let mock = mock_planet_model(0, name);

        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(mock.name),
                terrain: ActiveValue::Set(mock.terrain),
                population: ActiveValue::Set(mock.population),
                climate: ActiveValue::Set(mock.climate),
                gravity: ActiveValue::Set(mock.gravity),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
