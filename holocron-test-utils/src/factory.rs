//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating entity models with standard test values. These are
//! in-memory model instances that don't require database interaction, suitable for unit tests
//! of conversions and serialization.

use entity::sea_orm_active_enums::Gender;

/// Create a mock user model with an email derived from the username.
pub fn mock_user_model(id: i32, username: &str) -> entity::user::Model {
    entity::user::Model {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: "password".to_string(),
        is_active: true,
    }
}

/// Create a mock character model.
///
/// Every column is populated; `hair_color` and `eye_color` are set so tests can observe
/// them being cleared.
pub fn mock_character_model(id: i32, name: &str) -> entity::character::Model {
    entity::character::Model {
        id,
        name: name.to_string(),
        hair_color: Some("blond".to_string()),
        eye_color: Some("blue".to_string()),
        gender: Gender::Male,
        species: "Human".to_string(),
        height: "172".to_string(),
    }
}

/// Create a mock planet model with every nullable column populated.
pub fn mock_planet_model(id: i32, name: &str) -> entity::planet::Model {
    entity::planet::Model {
        id,
        name: name.to_string(),
        terrain: Some("desert".to_string()),
        population: Some(200_000),
        climate: Some("arid".to_string()),
        gravity: Some("1 standard".to_string()),
    }
}
