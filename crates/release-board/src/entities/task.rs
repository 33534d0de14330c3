//! Task entities loaded from the task database.

use serde::{Deserialize, Serialize};

use super::{Category, Phase, Priority, ReleaseType};

/// A single unit of release work that becomes one board item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier used for local tracking and `depends_on` references
    pub id: String,

    /// Item title on the board
    pub title: String,

    /// Item body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Board field: Category
    pub category: Category,

    /// Board field: Priority
    pub priority: Priority,

    /// Board field: Phase
    pub phase: Phase,

    /// Free-text estimate, e.g. "2-4 hours"
    pub time_estimate: String,

    /// Release types this task applies to
    #[serde(default = "default_release_types")]
    pub release_types: Vec<ReleaseType>,

    /// IDs of tasks this one depends on. Advisory only: upload order is
    /// always document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

fn default_release_types() -> Vec<ReleaseType> {
    vec![ReleaseType::All]
}

impl Task {
    /// Whether this task should be included for the given release type.
    pub fn applies_to(&self, release_type: ReleaseType) -> bool {
        self.release_types.contains(&ReleaseType::All) || self.release_types.contains(&release_type)
    }
}

/// The complete task database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    /// Schema version of the document
    #[serde(default = "default_version")]
    pub version: String,

    /// Tasks in upload order
    pub tasks: Vec<Task>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl TaskList {
    /// Tasks applicable to the given release type, in document order.
    pub fn filter_by_release_type(&self, release_type: ReleaseType) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.applies_to(release_type))
            .cloned()
            .collect()
    }

    /// Look up a task by its ID.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// `(task id, missing id)` pairs for every `depends_on` entry that names
    /// no task in this document.
    pub fn dangling_dependencies(&self) -> Vec<(&str, &str)> {
        self.tasks
            .iter()
            .flat_map(|task| {
                task.depends_on
                    .iter()
                    .filter(|dep| self.get(dep).is_none())
                    .map(move |dep| (task.id.as_str(), dep.as_str()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
