use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        comment::CreateCommentDto,
    },
    server::{
        controller::util::extract::AppJson,
        error::Error,
        model::app::AppState,
        service::comment::CommentService,
    },
};

/// OpenAPI tag for comment routes
pub static COMMENT_TAG: &str = "comment";

/// Post a comment, optionally about a character or planet
#[utoipa::path(
    post,
    path = "/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment added", body = MessageDto),
        (status = 400, description = "Missing content or user", body = ErrorDto),
        (status = 500, description = "Referenced row missing or internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCommentDto>,
) -> Result<impl IntoResponse, Error> {
    let comment_service = CommentService::new(&state.db);

    let comment_id = comment_service.create_comment(payload).await?;

    tracing::info!(id = %comment_id, "Added comment");

    Ok((
        StatusCode::CREATED,
        axum::Json(MessageDto {
            msg: "Comment added".to_string(),
        }),
    )
        .into_response())
}
