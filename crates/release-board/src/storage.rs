//! Task database loading.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::entities::TaskList;
use crate::errors::{BoardError, BoardResult};

/// Default location of the task database, relative to the working directory.
pub const DEFAULT_TASKS_FILE: &str = "data/tasks.json";

/// Read and validate the task database at `path`.
pub fn load_tasks(path: impl AsRef<Path>) -> BoardResult<TaskList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| BoardError::FileRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let list = parse_tasks(&content)?;
    debug!(path = %path.display(), tasks = list.len(), version = %list.version, "Loaded tasks");
    Ok(list)
}

/// Parse a task database from JSON text.
///
/// Unknown category, priority, phase or release type labels are rejected
/// here rather than at upload time.
pub fn parse_tasks(content: &str) -> BoardResult<TaskList> {
    let list: TaskList = serde_json::from_str(content)?;

    for (task_id, missing) in list.dangling_dependencies() {
        warn!(task = %task_id, depends_on = %missing, "Task depends on an unknown task ID");
    }

    Ok(list)
}
