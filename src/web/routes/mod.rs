use crate::{
    model::{OrderUpdate, ResourceType},
    web::{AppState, WebError, WebResult, doc::ApiDoc, dto::envelope::SuccessResponse},
};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod courses;
pub mod lessons;
pub mod levels;
pub mod modules;

pub fn build_app<S: Send + Sync + Clone + 'static>(state: AppState, docs: bool) -> Router<S> {
    let mut router = Router::new()
        .nest("/admin/courses", courses::routes(state.clone()))
        .nest("/admin/modules", modules::routes(state.clone()))
        .nest("/admin/lessons", lessons::routes(state.clone()))
        .nest("/admin/student-levels", levels::routes())
        .layer(CorsLayer::very_permissive())
        .with_state(state);

    if docs {
        let openapi = ApiDoc::openapi();

        router = router
            .merge(SwaggerUi::new("/admin/docs").url("/admin/api-doc/openapi.json", openapi));
    }

    router
}

/// Persists one reorder batch and renders the shared success envelope.
async fn apply_reorder(
    state: &AppState,
    resource: ResourceType,
    updates: Vec<OrderUpdate>,
) -> WebResult<Json<SuccessResponse>> {
    tracing::debug!(
        resource = resource.plural(),
        count = updates.len(),
        "applying reorder batch"
    );

    state
        .store()
        .update_orders(resource, &updates)
        .await
        .map_err(|e| WebError::reorder_error(resource, e))?;

    Ok(Json(SuccessResponse::ok()))
}
