use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ResourceType;
use crate::model::repo::ResourceTyped;

/// Groups lessons inside a course. Only its ordering is administered here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    id: String,
    course_id: String,
    title: String,
    order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ResourceTyped for Module {
    fn get_resource_type() -> ResourceType {
        ResourceType::Module
    }
}

impl Module {
    pub fn new<I, C, T>(id: I, course_id: C, title: T, order: i32) -> Self
    where
        I: Into<String>,
        C: Into<String>,
        T: Into<String>,
    {
        let now = Utc::now();
        Self {
            id: id.into(),
            course_id: course_id.into(),
            title: title.into(),
            order,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub(crate) fn set_order(&mut self, order: i32) {
        self.order = order;
        self.updated_at = Utc::now();
    }
}
