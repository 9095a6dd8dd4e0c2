use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::model::repo::ResourceTyped;
use crate::model::{DatabaseError, ModelManager, ResourceType, error::DatabaseResult};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema,
)]
#[sqlx(type_name = "lesson_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    Video,
    Text,
    Quiz,
    Assignment,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    id: String,
    module_id: String,
    title: String,
    content: String,
    #[sqlx(rename = "lesson_type")]
    #[serde(rename = "type")]
    kind: LessonType,
    duration: i32,
    #[sqlx(rename = "order_index")]
    order: i32,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ResourceTyped for Lesson {
    fn get_resource_type() -> ResourceType {
        ResourceType::Lesson
    }
}

impl Lesson {
    pub fn new<I, M, T>(id: I, module_id: M, title: T, kind: LessonType, order: i32) -> Self
    where
        I: Into<String>,
        M: Into<String>,
        T: Into<String>,
    {
        let now = Utc::now();
        Self {
            id: id.into(),
            module_id: module_id.into(),
            title: title.into(),
            content: String::new(),
            kind,
            duration: 0,
            order,
            published: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub(crate) fn set_order(&mut self, order: i32) {
        self.order = order;
        self.updated_at = Utc::now();
    }
}

const LESSON_COLUMNS: &str = "l.id, l.module_id, l.title, l.content, l.lesson_type, l.duration, \
                              l.order_index, l.published, l.created_at, l.updated_at";

impl Lesson {
    pub async fn all_by_module(mm: &ModelManager, module_id: &str) -> DatabaseResult<Vec<Self>> {
        let sql = format!(
            "SELECT {LESSON_COLUMNS} FROM lessons l \
             WHERE l.module_id = $1 \
             ORDER BY l.order_index ASC, l.id ASC"
        );

        let result = sqlx::query_as(&sql)
            .bind(module_id)
            .fetch_all(mm.executor())
            .await?;
        Ok(result)
    }

    pub async fn all_by_course(mm: &ModelManager, course_id: &str) -> DatabaseResult<Vec<Self>> {
        let sql = format!(
            "SELECT {LESSON_COLUMNS} FROM lessons l \
             JOIN modules m ON m.id = l.module_id \
             WHERE m.course_id = $1 \
             ORDER BY m.order_index ASC, l.order_index ASC, l.id ASC"
        );

        let result = sqlx::query_as(&sql)
            .bind(course_id)
            .fetch_all(mm.executor())
            .await?;
        Ok(result)
    }

    pub async fn delete_by_id(mm: &ModelManager, id: &str) -> DatabaseResult<()> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(mm.executor())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(Self::get_resource_type(), id));
        }

        Ok(())
    }
}
