/// Concurrency-safe task progress store
///
/// Process-wide map from task id to the page the fetcher is currently on,
/// polled by the status endpoint while an analysis request is running.
/// Entries are advisory only: absence means "never started" or "finished",
/// and readers cannot tell the two apart.
///
/// The mutex is internal; callers only see the four atomic operations. No
/// operation blocks on I/O.
use std::collections::HashMap;
use std::sync::Mutex;

use crate::types::TaskProgress;

#[derive(Debug, Default)]
pub struct ProgressStore {
    tasks: Mutex<HashMap<String, TaskProgress>>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task, overwriting any prior record for the same id
    pub fn create(&self, task_id: &str) {
        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.insert(task_id.to_string(), TaskProgress::default());
        }
    }

    /// Record the pool and page the fetcher is about to request.
    /// No-op when the task id is absent; never auto-creates.
    pub fn update(&self, task_id: &str, name: &str, page: &str) {
        if let Ok(mut tasks) = self.tasks.lock() {
            if let Some(progress) = tasks.get_mut(task_id) {
                progress.name = name.to_string();
                progress.page = page.to_string();
            }
        }
    }

    /// Current progress for a task, or the zero-value default when absent.
    /// Never fails.
    pub fn get(&self, task_id: &str) -> TaskProgress {
        match self.tasks.lock() {
            Ok(tasks) => tasks.get(task_id).cloned().unwrap_or_default(),
            Err(_) => TaskProgress::default(),
        }
    }

    /// Remove a task's record. Idempotent.
    pub fn delete(&self, task_id: &str) {
        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.remove(task_id);
        }
    }
}
