use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use crate::{
    model::{
        ResourceTyped,
        entity::{Lesson, Module},
    },
    types::{positional_orders, verbatim_orders},
    web::{
        AppState, ErrorResponse, WebError, WebResult,
        dto::{
            envelope::SuccessResponse,
            reorder::{LessonsReorderBody, ModulesReorderBody},
        },
        routes::apply_reorder,
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/{module_id}", put(modules_reorder_handler))
        .route("/{module_id}/lessons", get(module_lessons_list_handler))
        .route("/{module_id}/lessons/reorder", put(module_lessons_reorder_handler))
        .with_state(state)
}

#[utoipa::path(
    put,
    path = "/admin/modules/{module_id}",
    description = "Store the supplied `order` of every listed module",
    params(
        ("module_id" = String, Path, description = "Module the editor was opened from")
    ),
    request_body = ModulesReorderBody,
    responses(
        (status = 200, description = "All modules reordered", body = SuccessResponse),
        (status = 500, description = "At least one update failed", body = ErrorResponse),
    ),
    tag = "modules"
)]
#[tracing::instrument(skip(state, payload))]
pub async fn modules_reorder_handler(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
    payload: Result<Json<ModulesReorderBody>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let resource = Module::get_resource_type();
    let Json(payload) =
        payload.map_err(|e| WebError::reorder_bad_payload(resource, e.body_text()))?;

    let updates = verbatim_orders(payload.modules)
        .ok_or_else(|| WebError::reorder_bad_payload(resource, "module without `order`"))?;

    tracing::debug!(count = updates.len(), "module reorder requested");
    let body = apply_reorder(&state, resource, updates).await?;
    Ok((StatusCode::OK, body))
}

#[utoipa::path(
    put,
    path = "/admin/modules/{module_id}/lessons/reorder",
    description = "Store lessons in the sequence they are listed: the first gets order 1. \
                   The `order` field of each item is ignored",
    params(
        ("module_id" = String, Path, description = "Module owning the lessons")
    ),
    request_body = LessonsReorderBody,
    responses(
        (status = 200, description = "All lessons reordered", body = SuccessResponse),
        (status = 500, description = "At least one update failed", body = ErrorResponse),
    ),
    tag = "modules"
)]
#[tracing::instrument(skip(state, payload))]
pub async fn module_lessons_reorder_handler(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
    payload: Result<Json<LessonsReorderBody>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let resource = Lesson::get_resource_type();
    let Json(payload) =
        payload.map_err(|e| WebError::reorder_bad_payload(resource, e.body_text()))?;

    let updates = positional_orders(payload.lessons);
    tracing::debug!(count = updates.len(), "lesson reorder requested");
    let body = apply_reorder(&state, resource, updates).await?;
    Ok((StatusCode::OK, body))
}

#[utoipa::path(
    get,
    path = "/admin/modules/{module_id}/lessons",
    description = "List the lessons of a module sorted by their display order",
    params(
        ("module_id" = String, Path, description = "Module owning the lessons")
    ),
    responses(
        (status = 200, description = "Lessons collected", body = Vec<Lesson>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "modules"
)]
#[tracing::instrument(skip(state))]
pub async fn module_lessons_list_handler(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> WebResult<impl IntoResponse> {
    let lessons = state
        .store()
        .list_lessons(&module_id)
        .await
        .map_err(|e| WebError::list_error(Lesson::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(lessons)))
}
