use axum::{Json, Router, response::IntoResponse, routing::get};

use crate::types::StudentLevelInfo;

pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new().route("/", get(student_levels_handler))
}

#[utoipa::path(
    get,
    path = "/admin/student-levels",
    description = "Display metadata of every student level",
    responses(
        (status = 200, description = "Level table", body = Vec<StudentLevelInfo>),
    ),
    tag = "student-levels"
)]
pub async fn student_levels_handler() -> impl IntoResponse {
    Json(StudentLevelInfo::table())
}
