use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::{
    model::planet::{CreatePlanetDto, UpdatePlanetDto},
    server::controller::{
        planet::{create_planet, delete_planet, get_planet, list_planets, update_planet},
        util::extract::{AppJson, AppPath},
    },
};

use super::*;

fn hoth() -> CreatePlanetDto {
    CreatePlanetDto {
        name: "Hoth".to_string(),
        terrain: "tundra".to_string(),
        population: 0,
        climate: "frozen".to_string(),
        gravity: "1.1 standard".to_string(),
    }
}

/// Expect a created planet to be returned with a zero population
#[tokio::test]
async fn get_returns_created_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = create_planet(State(test.to_app_state()), AppJson(hoth()))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = body_json(resp).await["id"].as_i64().unwrap() as i32;

    let resp = get_planet(State(test.to_app_state()), AppPath(id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["name"], "Hoth");
    assert_eq!(body["population"], 0);
    assert_eq!(body["gravity"], "1.1 standard");

    Ok(())
}

/// Expect 400 for an empty climate
#[tokio::test]
async fn create_rejects_empty_climate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let mut dto = hoth();
    dto.climate = String::new();

    let resp = create_planet(State(test.to_app_state()), AppJson(dto))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Missing or empty required fields: climate");

    Ok(())
}

/// Expect every planet to be listed
#[tokio::test]
async fn list_returns_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Alderaan")
        .build()
        .await?;

    let resp = list_planets(State(test.to_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect null to clear the terrain
#[tokio::test]
async fn update_clears_terrain() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let resp = update_planet(
        State(test.to_app_state()),
        AppPath(1),
        AppJson(UpdatePlanetDto {
            terrain: Some(None),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(
        get_planet(State(test.to_app_state()), AppPath(1))
            .await
            .into_response(),
    )
    .await;
    assert!(body["terrain"].is_null());
    assert_eq!(body["climate"], "arid");

    Ok(())
}

/// Expect 400 when the name is set to null
#[tokio::test]
async fn update_rejects_null_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let resp = update_planet(
        State(test.to_app_state()),
        AppPath(1),
        AppJson(UpdatePlanetDto {
            name: Some(None),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 then 404 when deleting the same planet twice
#[tokio::test]
async fn second_delete_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Alderaan")
        .build()
        .await?;

    let first = delete_planet(State(test.to_app_state()), AppPath(1))
        .await
        .into_response();
    let second = delete_planet(State(test.to_app_state()), AppPath(1))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    Ok(())
}
