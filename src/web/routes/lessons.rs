use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::delete;
use axum::Json;
use axum::{extract::State, response::IntoResponse, Router};

use crate::model::entity::Lesson;
use crate::model::ResourceTyped;
use crate::web::dto::envelope::SuccessResponse;
use crate::web::{AppState, ErrorResponse, WebError, WebResult};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/{lesson_id}", delete(lessons_delete_handler))
        .with_state(state)
}

#[utoipa::path(
    delete,
    path = "/admin/lessons/{lesson_id}",
    description = "Delete a single lesson",
    params(
        ("lesson_id" = String, Path, description = "ID of the lesson to delete")
    ),
    responses(
        (status = 200, description = "Lesson deleted", body = SuccessResponse),
        (status = 500, description = "Lesson missing or storage failure", body = ErrorResponse),
    ),
    tag = "lessons"
)]
#[tracing::instrument(skip(state))]
pub async fn lessons_delete_handler(
    State(state): State<AppState>,
    Path(lesson_id): Path<String>,
) -> WebResult<impl IntoResponse> {
    state
        .store()
        .delete_lesson(&lesson_id)
        .await
        .map_err(|e| WebError::delete_error(Lesson::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(SuccessResponse::ok())))
}
