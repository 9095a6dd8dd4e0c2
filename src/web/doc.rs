use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::routes::courses::courses_reorder_handler,
        crate::web::routes::courses::courses_list_handler,
        crate::web::routes::courses::courses_get_handler,
        crate::web::routes::modules::modules_reorder_handler,
        crate::web::routes::modules::module_lessons_reorder_handler,
        crate::web::routes::modules::module_lessons_list_handler,
        crate::web::routes::lessons::lessons_delete_handler,
        crate::web::routes::levels::student_levels_handler,
    ),
    tags(
        (name = "courses", description = "Course ordering"),
        (name = "modules", description = "Module and lesson ordering"),
        (name = "lessons", description = "Lesson removal"),
        (name = "student-levels", description = "Student level metadata"),
    )
)]
pub struct ApiDoc;
