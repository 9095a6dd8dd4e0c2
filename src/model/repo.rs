use futures_util::future::try_join_all;

use crate::model::{
    entity::{Course, Lesson},
    error::DatabaseResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Course,
    Module,
    Lesson,
}

impl ResourceType {
    pub fn table(&self) -> &'static str {
        match self {
            Self::Course => "courses",
            Self::Module => "modules",
            Self::Lesson => "lessons",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Module => "module",
            Self::Lesson => "lesson",
        }
    }

    pub fn plural(&self) -> &'static str {
        self.table()
    }
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}

/// New display position for a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderUpdate {
    pub id: String,
    pub order: i32,
}

impl OrderUpdate {
    pub fn new<S: Into<String>>(id: S, order: i32) -> Self {
        Self {
            id: id.into(),
            order,
        }
    }
}

/// Storage handle shared by all admin handlers.
#[async_trait::async_trait]
pub trait CatalogStore: std::fmt::Debug + Send + Sync {
    /// Fails with `DatabaseError::NotFound` when no row has this id.
    async fn update_order(&self, resource: ResourceType, id: &str, order: i32)
    -> DatabaseResult<()>;

    /// Applies a whole batch; succeeds only if every update succeeds.
    async fn update_orders(
        &self,
        resource: ResourceType,
        updates: &[OrderUpdate],
    ) -> DatabaseResult<()> {
        update_orders_concurrently(self, resource, updates).await
    }

    async fn delete_lesson(&self, id: &str) -> DatabaseResult<()>;

    async fn list_courses(&self) -> DatabaseResult<Vec<Course>>;

    /// Course with the lessons of all its modules attached.
    async fn find_course(&self, id: &str) -> DatabaseResult<Option<Course>>;

    async fn list_lessons(&self, module_id: &str) -> DatabaseResult<Vec<Lesson>>;
}

/// Submits every update at once and fails fast on the first error. Updates
/// already applied are not rolled back.
pub async fn update_orders_concurrently<S>(
    store: &S,
    resource: ResourceType,
    updates: &[OrderUpdate],
) -> DatabaseResult<()>
where
    S: CatalogStore + ?Sized,
{
    if updates.is_empty() {
        return Ok(());
    }

    try_join_all(
        updates
            .iter()
            .map(|update| store.update_order(resource, &update.id, update.order)),
    )
    .await?;

    Ok(())
}
