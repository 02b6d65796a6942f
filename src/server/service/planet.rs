use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    server::{
        data::planet::{PlanetChanges, PlanetRepository},
        error::{api::ApiError, Error},
        service::RequiredChanges,
    },
};

fn not_found() -> Error {
    ApiError::NotFound("Planet not found".to_string()).into()
}

/// Service for planets
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every planet ordered by ID
    pub async fn get_all_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repository = PlanetRepository::new(self.db);

        let planets = planet_repository.get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Gets a planet, [`ApiError::NotFound`] if it does not exist
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet_repository = PlanetRepository::new(self.db);

        match planet_repository.get(planet_id).await? {
            Some(planet) => Ok(planet.into()),
            None => Err(not_found()),
        }
    }

    /// Creates a planet and returns its ID
    pub async fn create_planet(&self, planet: CreatePlanetDto) -> Result<i32, Error> {
        planet.validate()?;

        let planet_repository = PlanetRepository::new(self.db);

        let planet = planet_repository
            .create(planet)
            .await
            .map_err(|e| Error::conflict_on_unique(e, "Planet name already exists"))?;

        Ok(planet.id)
    }

    /// Applies a partial update to a planet
    ///
    /// Only `name` is protected from `null` and empty strings, every other column may be
    /// cleared.
    pub async fn update_planet(&self, planet_id: i32, planet: UpdatePlanetDto) -> Result<(), Error> {
        let mut required = RequiredChanges::default();

        let changes = PlanetChanges {
            name: required.string("name", planet.name),
            terrain: planet.terrain,
            population: planet.population,
            climate: planet.climate,
            gravity: planet.gravity,
        };

        required.finish()?;

        let planet_repository = PlanetRepository::new(self.db);

        planet_repository
            .update(planet_id, changes)
            .await
            .map_err(|e| Error::conflict_on_unique(e, "Planet name already exists"))?
            .ok_or_else(not_found)?;

        Ok(())
    }

    /// Deletes a planet and the favorites referencing it
    pub async fn delete_planet(&self, planet_id: i32) -> Result<(), Error> {
        let planet_repository = PlanetRepository::new(self.db);

        let result = planet_repository.delete(planet_id).await?;

        if result.rows_affected == 0 {
            return Err(not_found());
        }

        Ok(())
    }
}
