mod database;
pub use database::DbConnection;

pub mod entity;

mod error;
pub use error::{DatabaseError, DatabaseResult};

mod memory;
pub use memory::MemoryStore;

mod repo;
pub use repo::{
    CatalogStore, OrderUpdate, ResourceType, ResourceTyped, update_orders_concurrently,
};

use sqlx::{PgExecutor, PgPool};

use crate::model::entity::{Course, Lesson};

/// PostgreSQL-backed catalog store.
#[derive(Debug, Clone)]
pub struct ModelManager {
    database: DbConnection,
    transactional: bool,
}

impl ModelManager {
    pub fn new(conn: DbConnection) -> Self {
        Self {
            database: conn,
            transactional: false,
        }
    }

    pub fn with_transactional_reorder(mut self, transactional: bool) -> Self {
        self.transactional = transactional;
        self
    }

    pub fn executor(&self) -> &PgPool {
        self.database.pool()
    }
}

async fn update_order_with<'e, E: PgExecutor<'e>>(
    executor: E,
    resource: ResourceType,
    id: &str,
    order: i32,
) -> DatabaseResult<()> {
    let sql = format!(
        "UPDATE {} SET order_index = $1, updated_at = NOW() WHERE id = $2",
        resource.table()
    );

    let result = sqlx::query(&sql)
        .bind(order)
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::not_found(resource, id));
    }

    Ok(())
}

#[async_trait::async_trait]
impl CatalogStore for ModelManager {
    async fn update_order(
        &self,
        resource: ResourceType,
        id: &str,
        order: i32,
    ) -> DatabaseResult<()> {
        update_order_with(self.executor(), resource, id, order).await
    }

    async fn update_orders(
        &self,
        resource: ResourceType,
        updates: &[OrderUpdate],
    ) -> DatabaseResult<()> {
        if !self.transactional {
            return update_orders_concurrently(self, resource, updates).await;
        }

        if updates.is_empty() {
            return Ok(());
        }

        let mut tx = self.executor().begin().await?;
        for update in updates {
            update_order_with(&mut *tx, resource, &update.id, update.order).await?;
        }
        tx.commit().await?;

        Ok(())
    }

    async fn delete_lesson(&self, id: &str) -> DatabaseResult<()> {
        Lesson::delete_by_id(self, id).await
    }

    async fn list_courses(&self) -> DatabaseResult<Vec<Course>> {
        Course::list(self).await
    }

    async fn find_course(&self, id: &str) -> DatabaseResult<Option<Course>> {
        Course::find_with_lessons(self, id).await
    }

    async fn list_lessons(&self, module_id: &str) -> DatabaseResult<Vec<Lesson>> {
        Lesson::all_by_module(self, module_id).await
    }
}
