use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::{
    model::favorite::CreateFavoriteDto,
    server::controller::{
        favorite::{create_favorite, delete_favorite},
        util::extract::{AppJson, AppPath},
    },
};

use super::*;

/// Expect 201 when favoriting an existing character
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .with_mock_character("Yoda")
        .build()
        .await?;

    let resp = create_favorite(
        State(test.to_app_state()),
        AppJson(CreateFavoriteDto {
            user_id: 1,
            character_id: Some(1),
            planet_id: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["msg"], "Favorite added");

    Ok(())
}

/// Expect 400 without a character or planet
#[tokio::test]
async fn create_rejects_missing_target() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let resp = create_favorite(
        State(test.to_app_state()),
        AppJson(CreateFavoriteDto {
            user_id: 1,
            character_id: None,
            planet_id: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 when the referenced character does not exist
#[tokio::test]
async fn create_fails_for_nonexistent_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let resp = create_favorite(
        State(test.to_app_state()),
        AppJson(CreateFavoriteDto {
            user_id: 1,
            character_id: Some(7),
            planet_id: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 200 then 404 when deleting the same favorite twice
#[tokio::test]
async fn second_delete_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .with_mock_planet("Dagobah")
        .build()
        .await?;
    let favorite_model = test.favorite().insert_favorite(1, None, Some(1)).await?;

    let first = delete_favorite(State(test.to_app_state()), AppPath(favorite_model.id))
        .await
        .into_response();
    let second = delete_favorite(State(test.to_app_state()), AppPath(favorite_model.id))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    Ok(())
}
