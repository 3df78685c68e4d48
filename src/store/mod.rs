//! In-memory task store — the daemon's single source of truth.
//!
//! All records live in one `RwLock<Vec<Task>>` owned by [`TaskStore`]. The
//! write guard is held across the whole validate+mutate span, so mutations
//! serialize against each other and against `list`, and a rejected request
//! never leaves a record partially updated.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

/// Task state. Freely settable — there is no transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Parse the wire form: `"todo"`, `"in-progress"`, or `"done"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned positive id, unique among currently-stored tasks.
    pub id: u64,
    pub title: String,
    pub status: TaskStatus,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Caller-supplied data failed a field constraint. Surfaced as HTTP 400.
    #[error("{0}")]
    Validation(&'static str),
    /// Referenced id is not in the store. Surfaced as HTTP 404.
    #[error("task not found")]
    NotFound,
}

/// In-memory task collection.
///
/// Insertion order is preserved: `list` returns tasks in creation order and
/// deletes do not reorder survivors.
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
        }
    }

    /// Store pre-populated with the three records every fresh daemon starts
    /// with.
    pub fn seeded() -> Self {
        Self {
            tasks: RwLock::new(vec![
                Task {
                    id: 1,
                    title: "Finalize the deployment checklist".to_string(),
                    status: TaskStatus::Done,
                },
                Task {
                    id: 2,
                    title: "Wire up the staging environment".to_string(),
                    status: TaskStatus::InProgress,
                },
                Task {
                    id: 3,
                    title: "Draft the onboarding guide".to_string(),
                    status: TaskStatus::Todo,
                },
            ]),
        }
    }

    /// Snapshot of all tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Number of stored tasks.
    pub async fn count(&self) -> usize {
        self.tasks.read().await.len()
    }

    /// Create a task. `title` is required and trimmed; `status` defaults to
    /// `todo` when absent.
    pub async fn create(
        &self,
        title: Option<&str>,
        status: Option<&str>,
    ) -> Result<Task, TaskError> {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(TaskError::Validation("title is required"))?;
        let status = match status {
            None => TaskStatus::Todo,
            Some(s) => TaskStatus::parse(s).ok_or(TaskError::Validation("invalid status"))?,
        };

        let mut tasks = self.tasks.write().await;
        // Ids come from the current max, not a monotonic counter: deleting
        // the highest-id task and creating a new one reissues that id.
        let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task {
            id,
            title: title.to_string(),
            status,
        };
        tasks.push(task.clone());
        Ok(task)
    }

    /// Partial update: absent fields are left unchanged. An unknown id is
    /// reported before any field validation; both supplied fields are
    /// validated before either is applied.
    pub async fn update(
        &self,
        id: u64,
        title: Option<&str>,
        status: Option<&str>,
    ) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound)?;

        let new_title = match title {
            None => None,
            Some(t) => {
                let t = t.trim();
                if t.is_empty() {
                    return Err(TaskError::Validation("title cannot be empty"));
                }
                Some(t.to_string())
            }
        };
        let new_status = match status {
            None => None,
            Some(s) => {
                Some(TaskStatus::parse(s).ok_or(TaskError::Validation("invalid status"))?)
            }
        };

        if let Some(t) = new_title {
            task.title = t;
        }
        if let Some(s) = new_status {
            task.status = s;
        }
        Ok(task.clone())
    }

    /// Remove a task, returning the removed record as confirmation.
    pub async fn delete(&self, id: u64) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.write().await;
        let idx = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound)?;
        Ok(tasks.remove(idx))
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
