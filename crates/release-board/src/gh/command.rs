//! Argument vectors for the `gh project` subcommands we use.
//!
//! Building the arguments separately from running them lets dry runs print
//! exactly what would have been executed.

use crate::entities::{FieldSpec, FieldValue};

/// One `gh` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhCommand {
    subcommand: &'static str,
    args: Vec<String>,
}

impl GhCommand {
    fn new(subcommand: &'static str) -> Self {
        Self {
            subcommand,
            args: vec!["project".to_string(), subcommand.to_string()],
        }
    }

    fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    fn flag(self, name: &str, value: impl Into<String>) -> Self {
        self.arg(name).arg(value)
    }

    /// `gh project field-list`
    pub fn field_list(project_number: u64, owner: &str) -> Self {
        Self::new("field-list")
            .arg(project_number.to_string())
            .flag("--owner", owner)
            .flag("--format", "json")
    }

    /// `gh project item-create`. An empty body is treated as no body.
    pub fn item_create(project_number: u64, owner: &str, title: &str, body: Option<&str>) -> Self {
        let cmd = Self::new("item-create")
            .arg(project_number.to_string())
            .flag("--owner", owner)
            .flag("--title", title)
            .flag("--format", "json");
        match body {
            Some(body) if !body.is_empty() => cmd.flag("--body", body),
            _ => cmd,
        }
    }

    /// `gh project item-edit` for a single field.
    pub fn item_edit(project_id: &str, item_id: &str, field_id: &str, value: &FieldValue) -> Self {
        let cmd = Self::new("item-edit")
            .flag("--id", item_id)
            .flag("--project-id", project_id)
            .flag("--field-id", field_id)
            .flag("--format", "json");
        match value {
            FieldValue::SingleSelect(option_id) => {
                cmd.flag("--single-select-option-id", option_id.as_str())
            }
            FieldValue::Text(text) => cmd.flag("--text", text.as_str()),
        }
    }

    /// `gh project field-create`
    pub fn field_create(project_number: u64, owner: &str, field: &FieldSpec) -> Self {
        let cmd = Self::new("field-create")
            .arg(project_number.to_string())
            .flag("--owner", owner)
            .flag("--name", field.name.as_str())
            .flag("--data-type", field.data_type.as_str())
            .flag("--format", "json");
        if field.options.is_empty() {
            cmd
        } else {
            cmd.flag("--single-select-options", field.options.join(","))
        }
    }

    /// `gh project create`
    pub fn project_create(title: &str, owner: &str) -> Self {
        Self::new("create")
            .flag("--owner", owner)
            .flag("--title", title)
            .flag("--format", "json")
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Short name used in error messages, e.g. `gh project item-create`.
    pub fn label(&self) -> String {
        format!("gh project {}", self.subcommand)
    }

    /// The full command line, space separated, as shown in dry runs.
    pub fn display_line(&self) -> String {
        format!("gh {}", self.args.join(" "))
    }
}
