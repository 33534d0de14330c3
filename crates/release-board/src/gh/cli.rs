//! [`ProjectGateway`] backed by the GitHub CLI.

use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info};

use super::{GhCommand, ProjectGateway};
use crate::entities::{FieldSpec, FieldValue, ProjectField, ProjectFields, ProjectMetadata};
use crate::errors::{BoardError, BoardResult};

/// GitHub client for interacting with Projects via the `gh` CLI
#[derive(Debug, Clone)]
pub struct GhCli {
    program: PathBuf,
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new("gh")
    }
}

impl GhCli {
    /// Create a client that runs `program` (normally just `gh` on `PATH`).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run a command and return its stdout.
    ///
    /// Blocks until `gh` exits. A non-zero exit is an
    /// [`BoardError::ExternalTool`] carrying stderr.
    fn run(&self, cmd: &GhCommand) -> BoardResult<String> {
        debug!(
            program = %self.program.display(),
            command = %cmd.display_line(),
            "Running gh"
        );

        let output = Command::new(&self.program)
            .args(cmd.args())
            .output()
            .map_err(|source| BoardError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(command = %cmd.label(), stderr = %stderr, "gh command failed");
            return Err(BoardError::ExternalTool {
                command: cmd.label(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ProjectGateway for GhCli {
    fn list_fields(&self, project_number: u64, owner: &str) -> BoardResult<ProjectFields> {
        let stdout = self.run(&GhCommand::field_list(project_number, owner))?;
        parse_field_list(&stdout)
    }

    fn create_item(
        &self,
        project_number: u64,
        owner: &str,
        title: &str,
        body: Option<&str>,
    ) -> BoardResult<String> {
        let stdout = self.run(&GhCommand::item_create(project_number, owner, title, body))?;
        let item_id = parse_item_id(&stdout)?;
        info!(item_id = %item_id, title = %title, "Created project item");
        Ok(item_id)
    }

    fn update_item_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        value: &FieldValue,
    ) -> BoardResult<()> {
        self.run(&GhCommand::item_edit(project_id, item_id, field_id, value))?;
        info!(item_id, field_id, "Updated item field");
        Ok(())
    }

    fn create_field(
        &self,
        project_number: u64,
        owner: &str,
        field: &FieldSpec,
    ) -> BoardResult<Value> {
        let stdout = self.run(&GhCommand::field_create(project_number, owner, field))?;
        let value = serde_json::from_str(&stdout)?;
        info!(field = %field.name, project = project_number, "Created custom field");
        Ok(value)
    }

    fn create_project(&self, title: &str, owner: &str) -> BoardResult<ProjectMetadata> {
        let stdout = self.run(&GhCommand::project_create(title, owner))?;
        let project = parse_project(&stdout, owner)?;
        info!(number = project.number, url = %project.url, "Created project");
        Ok(project)
    }
}

#[derive(Debug, Deserialize)]
struct FieldListResponse {
    #[serde(default)]
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
struct FieldEntry {
    id: String,
    name: String,
    #[serde(default)]
    options: Option<Vec<OptionEntry>>,
}

#[derive(Debug, Deserialize)]
struct OptionEntry {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ItemResponse {
    id: String,
}

/// Parse `gh project field-list --format json` output.
pub fn parse_field_list(json: &str) -> BoardResult<ProjectFields> {
    let response: FieldListResponse = serde_json::from_str(json)?;
    Ok(response
        .fields
        .into_iter()
        .map(|field| {
            let options = field
                .options
                .map(|opts| opts.into_iter().map(|o| (o.name, o.id)).collect());
            (
                field.name,
                ProjectField {
                    id: field.id,
                    options,
                },
            )
        })
        .collect())
}

/// Parse the item ID out of `gh project item-create --format json` output.
pub fn parse_item_id(json: &str) -> BoardResult<String> {
    let response: ItemResponse = serde_json::from_str(json)?;
    Ok(response.id)
}

/// Parse `gh project create --format json` output.
///
/// `id`, `number`, `url` and `title` must all be present.
pub fn parse_project(json: &str, owner: &str) -> BoardResult<ProjectMetadata> {
    let data: Value = serde_json::from_str(json)?;

    let missing: Vec<&str> = ["id", "number", "url", "title"]
        .into_iter()
        .filter(|key| data.get(key).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(BoardError::schema(format!(
            "Missing required fields in gh output: {}",
            missing.join(", ")
        )));
    }

    let string_field = |key: &str| {
        let message = format!("Field '{key}' in gh output is not a string");
        data[key]
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| BoardError::schema(message))
    };

    Ok(ProjectMetadata {
        id: string_field("id")?,
        number: data["number"]
            .as_u64()
            .ok_or_else(|| BoardError::schema("Field 'number' in gh output is not a number"))?,
        url: string_field("url")?,
        title: string_field("title")?,
        owner: owner.to_string(),
        field_ids: std::collections::HashMap::new(),
    })
}
