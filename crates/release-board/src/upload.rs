//! Batch upload of tasks as board items.

use tracing::{info, warn};

use crate::entities::{
    FieldValue, ProjectFields, ProjectMetadata, Task, CATEGORY_FIELD, PHASE_FIELD, PRIORITY_FIELD,
};
use crate::errors::{BoardError, BoardResult};
use crate::gh::ProjectGateway;
use crate::ui;

/// A task that could not be fully uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFailure {
    pub title: String,
    pub error: String,
}

impl TaskFailure {
    pub fn new(title: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            error: error.into(),
        }
    }
}

/// Outcome of an upload in which at least one task succeeded (or there was
/// nothing to do).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Number of tasks attempted
    pub total: usize,
    /// Failed tasks, in upload order
    pub failures: Vec<TaskFailure>,
}

impl UploadReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Convert into an error when any task failed.
    pub fn into_result(self) -> BoardResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(BoardError::PartialBatchFailure {
                failed: self.failures.len(),
                total: self.total,
            })
        }
    }
}

/// Create one item per task and set its Category, Priority and Phase.
///
/// Tasks are processed strictly in order. A failure on one task stops work on
/// that task only and is recorded in the report. If every task fails the
/// whole upload fails with [`BoardError::TotalBatchFailure`].
///
/// A field is skipped silently when the board lacks it or lacks an option for
/// the task's value.
pub fn upload_tasks<G: ProjectGateway + ?Sized>(
    gateway: &G,
    project: &mut ProjectMetadata,
    tasks: &[Task],
    dry_run: bool,
) -> BoardResult<UploadReport> {
    if dry_run {
        ui::print_dry_run_note(&format!(
            "Would create {} tasks in project {}",
            tasks.len(),
            project.number
        ));
        return Ok(UploadReport {
            total: tasks.len(),
            failures: Vec::new(),
        });
    }

    ui::print_step("Fetching project fields...");
    let fields = gateway.list_fields(project.number, &project.owner)?;
    project.record_fields(&fields);

    let mut failures = Vec::new();
    for task in tasks {
        ui::print_progress(&format!("Creating task: {}", task.title));
        if let Err(e) = upload_task(gateway, project, &fields, task) {
            warn!(task = %task.id, error = %e, "Failed to process task");
            failures.push(TaskFailure::new(task.title.clone(), e.to_string()));
        }
    }

    if !failures.is_empty() && failures.len() == tasks.len() {
        return Err(BoardError::TotalBatchFailure { failures });
    }

    info!(
        total = tasks.len(),
        failed = failures.len(),
        "Finished uploading tasks"
    );
    Ok(UploadReport {
        total: tasks.len(),
        failures,
    })
}

fn upload_task<G: ProjectGateway + ?Sized>(
    gateway: &G,
    project: &ProjectMetadata,
    fields: &ProjectFields,
    task: &Task,
) -> BoardResult<()> {
    let item_id = gateway.create_item(
        project.number,
        &project.owner,
        &task.title,
        task.body.as_deref(),
    )?;

    let assignments = [
        (CATEGORY_FIELD, task.category.as_str()),
        (PRIORITY_FIELD, task.priority.as_str()),
        (PHASE_FIELD, task.phase.as_str()),
    ];
    for (field_name, label) in assignments {
        if let Some((field_id, option_id)) = fields.resolve(field_name, label) {
            gateway.update_item_field(
                &project.id,
                &item_id,
                field_id,
                &FieldValue::SingleSelect(option_id.to_string()),
            )?;
        }
    }
    Ok(())
}
