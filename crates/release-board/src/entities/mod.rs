//! Core entities: tasks, their fixed enumerations, and board metadata.

mod choices;
mod project;
mod task;

pub use choices::{Category, ParseChoiceError, Phase, Priority, ReleaseType};
pub use project::{
    FieldDataType, FieldSpec, FieldValue, ProjectField, ProjectFields, ProjectMetadata,
    CATEGORY_FIELD, DEFAULT_OWNER, PHASE_FIELD, PRIORITY_FIELD,
};
pub use task::{Task, TaskList};
