use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::{
    model::comment::CreateCommentDto,
    server::controller::{comment::create_comment, util::extract::AppJson},
};

use super::*;

/// Expect 201 when commenting on a character
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .with_mock_character("Yoda")
        .build()
        .await?;

    let resp = create_comment(
        State(test.to_app_state()),
        AppJson(CreateCommentDto {
            content: "Do or do not, there is no try".to_string(),
            user_id: 1,
            character_id: Some(1),
            planet_id: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["msg"], "Comment added");

    Ok(())
}

/// Expect 400 for empty content
#[tokio::test]
async fn create_rejects_empty_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let resp = create_comment(
        State(test.to_app_state()),
        AppJson(CreateCommentDto {
            content: String::new(),
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
