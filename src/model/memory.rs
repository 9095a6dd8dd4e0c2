use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::entity::{Course, Lesson, Module};
use crate::model::{CatalogStore, DatabaseError, DatabaseResult, ResourceType};

#[derive(Debug, Default)]
struct Catalog {
    courses: HashMap<String, Course>,
    modules: HashMap<String, Module>,
    lessons: HashMap<String, Lesson>,
}

/// Catalog store kept in process memory. Selected with `database_uri = "memory://"`
/// and used as the substitute store in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    catalog: RwLock<Catalog>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_course(mut self, course: Course) -> Self {
        let catalog = self.catalog.get_mut().unwrap_or_else(PoisonError::into_inner);
        catalog.courses.insert(course.id().to_string(), course);
        self
    }

    pub fn with_module(mut self, module: Module) -> Self {
        let catalog = self.catalog.get_mut().unwrap_or_else(PoisonError::into_inner);
        catalog.modules.insert(module.id().to_string(), module);
        self
    }

    pub fn with_lesson(mut self, lesson: Lesson) -> Self {
        let catalog = self.catalog.get_mut().unwrap_or_else(PoisonError::into_inner);
        catalog.lessons.insert(lesson.id().to_string(), lesson);
        self
    }

    /// Number of update/delete statements attempted so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Stored `order` of a row, if the row exists.
    pub fn order_of(&self, resource: ResourceType, id: &str) -> Option<i32> {
        let catalog = self.read().ok()?;
        match resource {
            ResourceType::Course => catalog.courses.get(id).map(Course::order),
            ResourceType::Module => catalog.modules.get(id).map(Module::order),
            ResourceType::Lesson => catalog.lessons.get(id).map(Lesson::order),
        }
    }

    fn read(&self) -> DatabaseResult<RwLockReadGuard<'_, Catalog>> {
        self.catalog
            .read()
            .map_err(|_| DatabaseError::StorageError("Lock poisoned".to_string()))
    }

    fn write(&self) -> DatabaseResult<RwLockWriteGuard<'_, Catalog>> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.catalog
            .write()
            .map_err(|_| DatabaseError::StorageError("Lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl CatalogStore for MemoryStore {
    async fn update_order(
        &self,
        resource: ResourceType,
        id: &str,
        order: i32,
    ) -> DatabaseResult<()> {
        let mut catalog = self.write()?;
        let updated = match resource {
            ResourceType::Course => catalog.courses.get_mut(id).map(|c| c.set_order(order)),
            ResourceType::Module => catalog.modules.get_mut(id).map(|m| m.set_order(order)),
            ResourceType::Lesson => catalog.lessons.get_mut(id).map(|l| l.set_order(order)),
        };

        updated.ok_or_else(|| DatabaseError::not_found(resource, id))
    }

    async fn delete_lesson(&self, id: &str) -> DatabaseResult<()> {
        let mut catalog = self.write()?;
        catalog
            .lessons
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DatabaseError::not_found(ResourceType::Lesson, id))
    }

    async fn list_courses(&self) -> DatabaseResult<Vec<Course>> {
        let catalog = self.read()?;
        let mut courses: Vec<Course> = catalog.courses.values().cloned().collect();
        courses.sort_by(|a, b| (a.order(), a.id()).cmp(&(b.order(), b.id())));
        Ok(courses)
    }

    async fn find_course(&self, id: &str) -> DatabaseResult<Option<Course>> {
        let catalog = self.read()?;
        let Some(course) = catalog.courses.get(id).cloned() else {
            return Ok(None);
        };

        let mut lessons: Vec<(i32, &Lesson)> = catalog
            .lessons
            .values()
            .filter_map(|lesson| {
                let module = catalog.modules.get(lesson.module_id())?;
                (module.course_id() == id).then_some((module.order(), lesson))
            })
            .collect();
        lessons.sort_by(|(ma, a), (mb, b)| (ma, a.order(), a.id()).cmp(&(mb, b.order(), b.id())));

        let lessons = lessons.into_iter().map(|(_, l)| l.clone()).collect();
        Ok(Some(course.with_lessons(lessons)))
    }

    async fn list_lessons(&self, module_id: &str) -> DatabaseResult<Vec<Lesson>> {
        let catalog = self.read()?;
        let mut lessons: Vec<Lesson> = catalog
            .lessons
            .values()
            .filter(|lesson| lesson.module_id() == module_id)
            .cloned()
            .collect();
        lessons.sort_by(|a, b| (a.order(), a.id()).cmp(&(b.order(), b.id())));
        Ok(lessons)
    }
}
