use serde::{Deserialize, Serialize};

use crate::types::{DragItem, PositionedItem};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CoursesReorderBody {
    pub courses: Vec<DragItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ModulesReorderBody {
    pub modules: Vec<DragItem>,
}

/// Lessons are stored in the order they appear; their `order` field is ignored.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct LessonsReorderBody {
    pub lessons: Vec<PositionedItem>,
}
