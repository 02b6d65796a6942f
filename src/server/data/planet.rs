use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::planet::CreatePlanetDto, server::model::db::PlanetModel};

/// Validated column changes for a partial planet update
///
/// `None` leaves a column untouched, `Some(None)` clears a nullable column.
#[derive(Default)]
pub struct PlanetChanges {
    /// New unique name, cannot be cleared
    pub name: Option<String>,
    /// New terrain
    pub terrain: Option<Option<String>>,
    /// New population
    pub population: Option<Option<i64>>,
    /// New climate
    pub climate: Option<Option<String>>,
    /// New gravity
    pub gravity: Option<Option<String>>,
}

/// Queries for the `planet` table
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a planet, every column of the payload is stored
    pub async fn create(&self, planet: CreatePlanetDto) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            terrain: ActiveValue::Set(Some(planet.terrain)),
            population: ActiveValue::Set(Some(planet.population)),
            climate: ActiveValue::Set(Some(planet.climate)),
            gravity: ActiveValue::Set(Some(planet.gravity)),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets a planet by ID, `Ok(None)` if it does not exist
    pub async fn get(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets all planets ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided changes to an existing planet
    ///
    /// Returns `Ok(None)` if the planet does not exist.
    pub async fn update(
        &self,
        planet_id: i32,
        changes: PlanetChanges,
    ) -> Result<Option<PlanetModel>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.clone().into_active_model();

        if let Some(name) = changes.name {
            planet_am.name = ActiveValue::Set(name);
        }
        if let Some(terrain) = changes.terrain {
            planet_am.terrain = ActiveValue::Set(terrain);
        }
        if let Some(population) = changes.population {
            planet_am.population = ActiveValue::Set(population);
        }
        if let Some(climate) = changes.climate {
            planet_am.climate = ActiveValue::Set(climate);
        }
        if let Some(gravity) = changes.gravity {
            planet_am.gravity = ActiveValue::Set(gravity);
        }

        if !planet_am.is_changed() {
            return Ok(Some(planet));
        }

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Check [`DeleteResult::rows_affected`] to confirm the planet existed.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
