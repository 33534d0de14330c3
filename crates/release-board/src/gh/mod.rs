//! Remote gateway: every change to the board goes through [`ProjectGateway`].
//!
//! [`GhCli`] is the real implementation. Each method is one `gh` invocation
//! with no retries; tests substitute their own implementation.

mod cli;
mod command;

pub use cli::{parse_field_list, parse_item_id, parse_project, GhCli};
pub use command::GhCommand;

use serde_json::Value;

use crate::entities::{FieldSpec, FieldValue, ProjectFields, ProjectMetadata};
use crate::errors::BoardResult;

/// Operations on a remote project board.
pub trait ProjectGateway {
    /// Fields on the board and, for single-select fields, their options.
    fn list_fields(&self, project_number: u64, owner: &str) -> BoardResult<ProjectFields>;

    /// Create a draft item and return its node ID.
    fn create_item(
        &self,
        project_number: u64,
        owner: &str,
        title: &str,
        body: Option<&str>,
    ) -> BoardResult<String>;

    /// Set one field on an item.
    fn update_item_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        value: &FieldValue,
    ) -> BoardResult<()>;

    /// Create a custom field and return the raw response.
    fn create_field(
        &self,
        project_number: u64,
        owner: &str,
        field: &FieldSpec,
    ) -> BoardResult<Value>;

    /// Create a new board.
    fn create_project(&self, title: &str, owner: &str) -> BoardResult<ProjectMetadata>;
}
