use std::path::Path;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use lms_admin::build_server_with_store;
use lms_admin::model::entity::{Course, Lesson, LessonType, Module};
use lms_admin::model::{
    CatalogStore, DatabaseError, DatabaseResult, DbConnection, MemoryStore, ModelManager,
    ResourceType,
};
use serde_json::{Value, json};
use sqlx::{Executor, PgPool, migrate::Migrator, postgres::PgPoolOptions};
use url::Url;
use uuid::Uuid;

/// Catalog used by most flows:
///
/// - courses `C1`..`C3` with orders 1..3
/// - modules `M1` (order 1) and `M2` (order 2), both in `C1`
/// - lessons `L1`..`L3` in `M1` with orders 1..3, `L4` in `M2`
pub fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_course(Course::new("C1", "Rust fundamentals", 1))
        .with_course(Course::new("C2", "Async Rust", 2))
        .with_course(Course::new("C3", "Embedded Rust", 3))
        .with_module(Module::new("M1", "C1", "Ownership", 1))
        .with_module(Module::new("M2", "C1", "Traits", 2))
        .with_lesson(Lesson::new("L1", "M1", "Moves", LessonType::Video, 1))
        .with_lesson(Lesson::new("L2", "M1", "Borrows", LessonType::Text, 2))
        .with_lesson(Lesson::new("L3", "M1", "Lifetimes", LessonType::Quiz, 3))
        .with_lesson(Lesson::new("L4", "M2", "Generics", LessonType::Assignment, 1))
}

const SEED_SQL: &str = r#"
INSERT INTO courses (id, title, order_index) VALUES
    ('C1', 'Rust fundamentals', 1),
    ('C2', 'Async Rust', 2),
    ('C3', 'Embedded Rust', 3);
INSERT INTO modules (id, course_id, title, order_index) VALUES
    ('M1', 'C1', 'Ownership', 1),
    ('M2', 'C1', 'Traits', 2);
INSERT INTO lessons (id, module_id, title, lesson_type, order_index) VALUES
    ('L1', 'M1', 'Moves', 'video', 1),
    ('L2', 'M1', 'Borrows', 'text', 2),
    ('L3', 'M1', 'Lifetimes', 'quiz', 3),
    ('L4', 'M2', 'Generics', 'assignment', 1);
"#;

/// Creates a throwaway database holding the `seeded_store` catalog. Returns
/// `None` when `TEST_DATABASE_ADMIN_URL` is not set, so flows without a
/// PostgreSQL server are skipped.
pub async fn setup_test_db() -> Option<FlowDatabase> {
    let _ = dotenvy::dotenv();
    let Ok(admin_url) = std::env::var("TEST_DATABASE_ADMIN_URL") else {
        eprintln!("TEST_DATABASE_ADMIN_URL is not set, skipping PostgreSQL flow");
        return None;
    };
    let db_name = format!("test_db_{}", Uuid::new_v4().simple());

    let mut url = Url::parse(&admin_url).unwrap();

    let admin_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(url.as_str())
        .await
        .unwrap();

    admin_pool
        .execute(format!(r#"CREATE DATABASE "{}""#, db_name).as_str())
        .await
        .unwrap();

    url.set_path(&db_name);

    let pool = PgPool::connect(url.as_str()).await.unwrap();
    Migrator::new(Path::new("./migrations"))
        .await
        .unwrap()
        .run(&pool)
        .await
        .unwrap();
    pool.execute(SEED_SQL).await.unwrap();

    Some(FlowDatabase {
        db_name,
        admin_url,
        pool,
    })
}

/// `FlowDatabase` is a temporary postgres database, dropped on `Drop`.
// FIXME: Drop database even if the test panics
pub struct FlowDatabase {
    db_name: String,
    admin_url: String,
    pool: PgPool,
}

impl FlowDatabase {
    pub fn store(&self, transactional: bool) -> Arc<ModelManager> {
        let conn = DbConnection::from_pool(self.pool.clone());
        Arc::new(ModelManager::new(conn).with_transactional_reorder(transactional))
    }

    /// Stored `order_index` of a row, read straight from the table.
    pub async fn order_of(&self, resource: ResourceType, id: &str) -> Option<i32> {
        let sql = format!("SELECT order_index FROM {} WHERE id = $1", resource.table());
        sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap()
    }
}

impl Drop for FlowDatabase {
    fn drop(&mut self) {
        let db_name = self.db_name.clone();
        let admin_url = self.admin_url.clone();

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn_blocking(move || {
                // fresh runtime inside this blocking thread
                let rt = tokio::runtime::Runtime::new().unwrap();
                rt.block_on(async move {
                    if let Ok(admin_pool) = PgPool::connect(&admin_url).await {
                        let _ = admin_pool
                            .execute(format!(r#"DROP DATABASE "{}" WITH (FORCE)"#, db_name).as_str())
                            .await;
                    }
                });
            });
        }
    }
}

pub fn setup_server(store: Arc<dyn CatalogStore>) -> TestServer {
    let (_, app) = build_server_with_store(store);
    TestServer::new(app).unwrap()
}

/// Delegates to a `MemoryStore` but rejects every write naming `failing_id`.
#[derive(Debug)]
pub struct FailingStore {
    inner: Arc<MemoryStore>,
    failing_id: String,
}

impl FailingStore {
    pub fn new(inner: Arc<MemoryStore>, failing_id: &str) -> Self {
        Self {
            inner,
            failing_id: failing_id.to_string(),
        }
    }

    fn check(&self, id: &str) -> DatabaseResult<()> {
        if id == self.failing_id {
            return Err(DatabaseError::StorageError(format!("write to `{id}` refused")));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogStore for FailingStore {
    async fn update_order(
        &self,
        resource: ResourceType,
        id: &str,
        order: i32,
    ) -> DatabaseResult<()> {
        self.check(id)?;
        self.inner.update_order(resource, id, order).await
    }

    async fn delete_lesson(&self, id: &str) -> DatabaseResult<()> {
        self.check(id)?;
        self.inner.delete_lesson(id).await
    }

    async fn list_courses(&self) -> DatabaseResult<Vec<Course>> {
        self.inner.list_courses().await
    }

    async fn find_course(&self, id: &str) -> DatabaseResult<Option<Course>> {
        self.inner.find_course(id).await
    }

    async fn list_lessons(&self, module_id: &str) -> DatabaseResult<Vec<Lesson>> {
        self.inner.list_lessons(module_id).await
    }
}

pub struct Action {
    #[allow(unused)]
    pub name: &'static str,
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
    pub raw_body: Option<&'static str>,
    pub expect: StatusCode,
    pub body_asserts: Vec<Box<dyn Fn(&Value) + Send + Sync>>,
}

impl Action {
    pub fn new<P: Into<String>>(name: &'static str, method: &'static str, path: P) -> Self {
        Self {
            name,
            method,
            path: path.into(),
            body: None,
            raw_body: None,
            expect: StatusCode::OK,
            body_asserts: vec![],
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sends `raw` verbatim as an `application/json` body.
    pub fn with_raw_body(mut self, raw: &'static str) -> Self {
        self.raw_body = Some(raw);
        self
    }

    pub fn with_expect(mut self, expect: StatusCode) -> Self {
        self.expect = expect;
        self
    }

    pub fn assert_body<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.body_asserts.push(Box::new(check));
        self
    }

    pub fn expect_success(self) -> Self {
        self.with_expect(StatusCode::OK)
            .assert_body(|body| assert_eq!(body, &json!({ "success": true })))
    }

    pub fn expect_failure(self, message: &'static str) -> Self {
        self.with_expect(StatusCode::INTERNAL_SERVER_ERROR)
            .assert_body(move |body| assert_eq!(body, &json!({ "error": message })))
    }
}

pub struct Flow {
    actions: Vec<Action>,
}

impl Flow {
    pub fn new() -> Self {
        Self { actions: vec![] }
    }

    pub fn step(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub async fn run(self, server: &TestServer) {
        for action in self.actions {
            println!("==> Running test action `{}`", action.name);

            let mut req = match action.method {
                "GET" => server.get(&action.path),
                "PUT" => server.put(&action.path),
                "DELETE" => server.delete(&action.path),
                _ => panic!("unsupported method {}", action.method),
            };

            if let Some(json) = &action.body {
                req = req.json(json);
            }

            if let Some(raw) = action.raw_body {
                req = req.text(raw).content_type("application/json");
            }

            let resp = req.await;
            resp.assert_status(action.expect);

            if !action.body_asserts.is_empty() {
                let body = resp.json::<Value>();
                for check in &action.body_asserts {
                    check(&body);
                }
            }
        }
    }
}

// Common actions builders

pub fn reorder_courses_action(body: Value) -> Action {
    Action::new("reorder_courses", "PUT", "/admin/courses/reorder").with_body(body)
}

pub fn reorder_modules_action(module_id: &str, body: Value) -> Action {
    Action::new("reorder_modules", "PUT", format!("/admin/modules/{module_id}")).with_body(body)
}

pub fn reorder_lessons_action(module_id: &str, body: Value) -> Action {
    Action::new(
        "reorder_lessons",
        "PUT",
        format!("/admin/modules/{module_id}/lessons/reorder"),
    )
    .with_body(body)
}

pub fn delete_lesson_action(lesson_id: &str) -> Action {
    Action::new("delete_lesson", "DELETE", format!("/admin/lessons/{lesson_id}"))
}
