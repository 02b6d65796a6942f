use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::{
    model::user::CreateUserDto,
    server::controller::{
        user::{create_user, get_user_favorites, list_users},
        util::extract::AppJson,
    },
};

use super::*;

fn create_dto(username: &str, email: &str) -> CreateUserDto {
    CreateUserDto {
        username: username.to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
    }
}

/// Expect 201 with the new ID when registering a user
#[tokio::test]
async fn create_returns_created_with_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_user(
        State(test.to_app_state()),
        AppJson(create_dto("luke", "luke@rebellion.org")),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert!(body["msg"].is_string());

    Ok(())
}

/// Expect 400 when the email is already registered
#[tokio::test]
async fn create_rejects_registered_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let result = create_user(
        State(test.to_app_state()),
        AppJson(create_dto("skywalker", "luke@example.com")),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Email is already registered");

    Ok(())
}

/// Expect 400 when a field is empty
#[tokio::test]
async fn create_rejects_empty_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_user(
        State(test.to_app_state()),
        AppJson(create_dto("", "luke@example.com")),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 with users that do not expose their password
#[tokio::test]
async fn list_hides_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .with_mock_user("leia")
        .build()
        .await?;

    let result = list_users(State(test.to_app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users[0].get("password").is_none());
    assert!(users[0].get("is_active").is_none());
    assert_eq!(users[1]["username"], "leia");

    Ok(())
}

/// Expect 500 when the user table does not exist
#[tokio::test]
async fn list_fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_users(State(test.to_app_state())).await;

    assert_eq!(
        result.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    Ok(())
}

/// Expect 501 for the favorites of the logged in user
#[tokio::test]
async fn user_favorites_is_not_implemented() -> Result<(), TestError> {
    let result = get_user_favorites().await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());

    Ok(())
}
