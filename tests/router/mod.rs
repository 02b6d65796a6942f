//! End to end tests through the full application service.
//!
//! Requests go through path normalization, the extractors and the error responses, which
//! the direct handler tests do not cover.

use axum::http::{header, StatusCode};
use holocron::server::{model::app::AppState, router::app};
use holocron_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::util::{body_json, body_text, empty_request, json_request};

/// Expect the documented Luke example to round trip through create and get
#[tokio::test]
async fn create_then_get_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(json_request(
            "POST",
            "/people",
            &json!({"name": "Luke", "gender": "Male", "species": "Human", "height": "172"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert!(body["msg"].is_string());

    let resp = app(test.to_app_state())
        .oneshot(empty_request("GET", "/people/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "id": 1,
            "name": "Luke",
            "hair_color": null,
            "eye_color": null,
            "gender": "Male",
            "species": "Human",
            "height": "172"
        })
    );

    Ok(())
}

/// Expect 400 for a planet without gravity
#[tokio::test]
async fn planet_without_gravity_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(json_request(
            "POST",
            "/planets",
            &json!({"name": "Hoth", "terrain": "tundra", "population": 0, "climate": "frozen"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());

    Ok(())
}

/// Expect create and update to both accept a negative population
#[tokio::test]
async fn negative_population_is_accepted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(json_request(
            "POST",
            "/planets",
            &json!({
                "name": "Hoth",
                "terrain": "tundra",
                "population": -1,
                "climate": "frozen",
                "gravity": "1.1 standard"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app(test.to_app_state())
        .oneshot(json_request("PUT", "/planets/1", &json!({"population": -5})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(test.to_app_state())
        .oneshot(empty_request("GET", "/planets/1"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["population"], -5);

    Ok(())
}

/// Expect 400 rather than a foreign key failure for a character ID of zero
#[tokio::test]
async fn favorite_with_zero_character_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let resp = app(test.to_app_state())
        .oneshot(json_request(
            "POST",
            "/favorites",
            &json!({"user_id": 1, "character_id": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());

    Ok(())
}

/// Expect 400 for a favorite with only a user
#[tokio::test]
async fn favorite_without_target_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let resp = app(test.to_app_state())
        .oneshot(json_request("POST", "/favorites", &json!({"user_id": 1})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["error"],
        "character_id or planet_id is required"
    );

    Ok(())
}

/// Expect 400 for a gender outside Male, Female and Other
#[tokio::test]
async fn unknown_gender_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(json_request(
            "POST",
            "/people",
            &json!({"name": "R2-D2", "gender": "Droid", "species": "Droid", "height": "96"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when registering an email twice
#[tokio::test]
async fn duplicate_email_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let payload = json!({"username": "luke", "email": "luke@rebellion.org", "password": "x"});

    let first = app(test.to_app_state())
        .oneshot(json_request("POST", "/users", &payload))
        .await
        .unwrap();
    let second = app(test.to_app_state())
        .oneshot(json_request(
            "POST",
            "/users",
            &json!({"username": "skywalker", "email": "luke@rebellion.org", "password": "x"}),
        ))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect absent keys to be kept and null to clear a color
#[tokio::test]
async fn update_distinguishes_absent_and_null() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_character("Han Solo")
        .build()
        .await?;

    let resp = app(test.to_app_state())
        .oneshot(json_request(
            "PUT",
            "/people/1",
            &json!({"hair_color": null, "height": "180"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(test.to_app_state())
        .oneshot(empty_request("GET", "/people/1"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert!(body["hair_color"].is_null());
    assert_eq!(body["eye_color"], "blue");
    assert_eq!(body["height"], "180");
    assert_eq!(body["name"], "Han Solo");

    Ok(())
}

/// Expect 400 when a required field is set to null
#[tokio::test]
async fn null_required_field_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_character("Han Solo")
        .build()
        .await?;

    let resp = app(test.to_app_state())
        .oneshot(json_request("PUT", "/people/1", &json!({"gender": null})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["error"],
        "Missing or empty required fields: gender"
    );

    Ok(())
}

/// Expect a trailing slash to reach the same route
#[tokio::test]
async fn trailing_slash_is_ignored() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let resp = app(test.to_app_state())
        .oneshot(empty_request("GET", "/planets/"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await[0]["name"], "Tatooine");

    Ok(())
}

/// Expect 400 with an error body for a non-integer ID
#[tokio::test]
async fn non_integer_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(empty_request("GET", "/planets/abc"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());

    Ok(())
}

/// Expect 400 with an error body for malformed JSON
#[tokio::test]
async fn malformed_json_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/planets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{\"name\": "))
        .unwrap();

    let resp = app(test.to_app_state()).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());

    Ok(())
}

/// Expect 400 for a body sent without a JSON content type
#[tokio::test]
async fn missing_content_type_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/comments")
        .body(axum::body::Body::from("content=hello&user_id=1"))
        .unwrap();

    let resp = app(test.to_app_state()).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 on the second delete of a character
#[tokio::test]
async fn second_delete_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_character("Han Solo")
        .build()
        .await?;

    let first = app(test.to_app_state())
        .oneshot(empty_request("DELETE", "/people/1"))
        .await
        .unwrap();
    let second = app(test.to_app_state())
        .oneshot(empty_request("DELETE", "/people/1"))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(second).await["error"], "Character not found");

    Ok(())
}

/// Expect 501 for the favorites of the logged in user
#[tokio::test]
async fn user_favorites_is_not_implemented() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(empty_request("GET", "/users/favorites"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);

    Ok(())
}

/// Expect the sitemap to link the list endpoints
#[tokio::test]
async fn sitemap_lists_endpoints() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(empty_request("GET", "/"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("<a href=\"/characters\">/characters</a>"));
    assert!(html.contains("<a href=\"/planets\">/planets</a>"));
    assert!(html.contains("PUT /people/{id}"));

    Ok(())
}

/// Expect the OpenAPI document to describe the character routes
#[tokio::test]
async fn openapi_document_is_served() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state: AppState = test.to_app_state();

    let resp = app(state)
        .oneshot(empty_request("GET", "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    assert!(doc["paths"]["/people/{id}"]["put"].is_object());

    Ok(())
}
