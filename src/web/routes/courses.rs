use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use crate::{
    model::{ResourceTyped, entity::Course},
    types::verbatim_orders,
    web::{
        AppState, ErrorResponse, WebError, WebResult,
        dto::{envelope::SuccessResponse, reorder::CoursesReorderBody},
        routes::apply_reorder,
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", get(courses_list_handler))
        .route("/reorder", put(courses_reorder_handler))
        .route("/{course_id}", get(courses_get_handler))
        .with_state(state)
}

#[utoipa::path(
    put,
    path = "/admin/courses/reorder",
    description = "Store the supplied `order` of every listed course",
    request_body = CoursesReorderBody,
    responses(
        (status = 200, description = "All courses reordered", body = SuccessResponse),
        (status = 500, description = "At least one update failed", body = ErrorResponse),
    ),
    tag = "courses"
)]
#[tracing::instrument(skip(state, payload))]
pub async fn courses_reorder_handler(
    State(state): State<AppState>,
    payload: Result<Json<CoursesReorderBody>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let resource = Course::get_resource_type();
    let Json(payload) =
        payload.map_err(|e| WebError::reorder_bad_payload(resource, e.body_text()))?;

    let updates = verbatim_orders(payload.courses)
        .ok_or_else(|| WebError::reorder_bad_payload(resource, "course without `order`"))?;

    let body = apply_reorder(&state, resource, updates).await?;
    Ok((StatusCode::OK, body))
}

#[utoipa::path(
    get,
    path = "/admin/courses",
    description = "List every course sorted by its display order",
    responses(
        (status = 200, description = "Courses collected", body = Vec<Course>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
#[tracing::instrument(skip(state))]
pub async fn courses_list_handler(State(state): State<AppState>) -> WebResult<impl IntoResponse> {
    let courses = state
        .store()
        .list_courses()
        .await
        .map_err(|e| WebError::list_error(Course::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(courses)))
}

#[utoipa::path(
    get,
    path = "/admin/courses/{course_id}",
    description = "Fetch a course together with the lessons of all its modules",
    params(
        ("course_id" = String, Path, description = "ID of the course to get")
    ),
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
#[tracing::instrument(skip(state))]
pub async fn courses_get_handler(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> WebResult<impl IntoResponse> {
    let course = state
        .store()
        .find_course(&course_id)
        .await
        .map_err(|e| WebError::fetch_error(Course::get_resource_type(), e))?
        .ok_or_else(|| WebError::resource_not_found(Course::get_resource_type()))?;

    Ok((StatusCode::OK, Json(course)))
}
