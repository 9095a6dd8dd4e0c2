use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::model::entity::Lesson;
use crate::model::repo::ResourceTyped;
use crate::model::{ModelManager, ResourceType, error::DatabaseResult};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    id: String,
    title: String,
    description: String,
    thumbnail: Option<String>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    lessons: Vec<Lesson>,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    enrollment_count: i32,
    #[sqlx(rename = "order_index")]
    order: i32,
}

impl ResourceTyped for Course {
    fn get_resource_type() -> ResourceType {
        ResourceType::Course
    }
}

impl Course {
    pub fn new<I: Into<String>, T: Into<String>>(id: I, title: T, order: i32) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            thumbnail: None,
            lessons: Vec::new(),
            published: false,
            created_at: now,
            updated_at: now,
            enrollment_count: 0,
            order,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn with_lessons(mut self, lessons: Vec<Lesson>) -> Self {
        self.lessons = lessons;
        self
    }

    pub(crate) fn set_order(&mut self, order: i32) {
        self.order = order;
        self.updated_at = Utc::now();
    }
}

impl Course {
    pub async fn list(mm: &ModelManager) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            r#"
            SELECT id, title, description, thumbnail, published,
                   created_at, updated_at, enrollment_count, order_index
            FROM courses
            ORDER BY order_index ASC, id ASC
            "#,
        )
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }

    pub async fn find_by_id(mm: &ModelManager, id: &str) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as(
            r#"
            SELECT id, title, description, thumbnail, published,
                   created_at, updated_at, enrollment_count, order_index
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(mm.executor())
        .await?;
        Ok(result)
    }

    pub async fn find_with_lessons(mm: &ModelManager, id: &str) -> DatabaseResult<Option<Self>> {
        let Some(course) = Self::find_by_id(mm, id).await? else {
            return Ok(None);
        };

        let lessons = Lesson::all_by_course(mm, id).await?;
        Ok(Some(course.with_lessons(lessons)))
    }
}
