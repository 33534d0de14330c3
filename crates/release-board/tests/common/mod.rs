//! Shared helpers for integration tests.
//!
//! [`RecordingGateway`] stands in for `gh`: it records every call in order
//! and fails on demand.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::Write;

use release_board::entities::{
    Category, FieldSpec, FieldValue, Phase, Priority, ProjectField, ProjectFields, ProjectMetadata,
    ReleaseType, Task,
};
use release_board::{BoardError, BoardResult, ProjectGateway};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListFields {
        project_number: u64,
        owner: String,
    },
    CreateItem {
        project_number: u64,
        title: String,
        body: Option<String>,
    },
    UpdateField {
        project_id: String,
        item_id: String,
        field_id: String,
        value: FieldValue,
    },
    CreateField {
        project_number: u64,
        name: String,
        options: Vec<String>,
    },
    CreateProject {
        title: String,
        owner: String,
    },
}

#[derive(Debug, Default)]
pub struct RecordingGateway {
    pub fields: ProjectFields,
    calls: RefCell<Vec<Call>>,
    failing_items: HashSet<String>,
    failing_updates: HashSet<String>,
    fail_project: bool,
    fail_list_fields: bool,
}

impl RecordingGateway {
    pub fn new(fields: ProjectFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Item creation fails for a task with this title.
    pub fn fail_item(mut self, title: &str) -> Self {
        self.failing_items.insert(title.to_string());
        self
    }

    /// Field updates fail for the item created from this title.
    pub fn fail_updates(mut self, title: &str) -> Self {
        self.failing_updates.insert(item_id_for(title));
        self
    }

    pub fn fail_project(mut self) -> Self {
        self.fail_project = true;
        self
    }

    pub fn fail_list_fields(mut self) -> Self {
        self.fail_list_fields = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn created_items(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreateItem { title, .. } => Some(title),
                _ => None,
            })
            .collect()
    }

    /// `(field id, value)` pairs set on the item created from `title`.
    pub fn updates_for(&self, title: &str) -> Vec<(String, FieldValue)> {
        let item = item_id_for(title);
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::UpdateField {
                    item_id,
                    field_id,
                    value,
                    ..
                } if item_id == item => Some((field_id, value)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn external(command: &str, stderr: &str) -> BoardError {
    BoardError::ExternalTool {
        command: command.to_string(),
        stderr: stderr.to_string(),
    }
}

pub fn item_id_for(title: &str) -> String {
    format!("item:{title}")
}

impl ProjectGateway for RecordingGateway {
    fn list_fields(&self, project_number: u64, owner: &str) -> BoardResult<ProjectFields> {
        self.record(Call::ListFields {
            project_number,
            owner: owner.to_string(),
        });
        if self.fail_list_fields {
            return Err(external("gh project field-list", "project not found"));
        }
        Ok(self.fields.clone())
    }

    fn create_item(
        &self,
        project_number: u64,
        _owner: &str,
        title: &str,
        body: Option<&str>,
    ) -> BoardResult<String> {
        self.record(Call::CreateItem {
            project_number,
            title: title.to_string(),
            body: body.map(ToString::to_string),
        });
        if self.failing_items.contains(title) {
            return Err(external("gh project item-create", "item limit reached"));
        }
        Ok(item_id_for(title))
    }

    fn update_item_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        value: &FieldValue,
    ) -> BoardResult<()> {
        self.record(Call::UpdateField {
            project_id: project_id.to_string(),
            item_id: item_id.to_string(),
            field_id: field_id.to_string(),
            value: value.clone(),
        });
        if self.failing_updates.contains(item_id) {
            return Err(external("gh project item-edit", "field is read-only"));
        }
        Ok(())
    }

    fn create_field(
        &self,
        project_number: u64,
        _owner: &str,
        field: &FieldSpec,
    ) -> BoardResult<Value> {
        self.record(Call::CreateField {
            project_number,
            name: field.name.clone(),
            options: field.options.clone(),
        });
        Ok(json!({ "id": format!("fld:{}", field.name), "name": field.name }))
    }

    fn create_project(&self, title: &str, owner: &str) -> BoardResult<ProjectMetadata> {
        self.record(Call::CreateProject {
            title: title.to_string(),
            owner: owner.to_string(),
        });
        if self.fail_project {
            return Err(external("gh project create", "authentication required"));
        }
        Ok(project(title, owner))
    }
}

pub fn project(title: &str, owner: &str) -> ProjectMetadata {
    ProjectMetadata {
        id: "PVT_test".to_string(),
        number: 42,
        url: "https://github.com/users/me/projects/42".to_string(),
        title: title.to_string(),
        owner: owner.to_string(),
        field_ids: HashMap::new(),
    }
}

/// A single-select field with one option per label.
pub fn select_field(name: &str, labels: &[&str]) -> (String, ProjectField) {
    (
        name.to_string(),
        ProjectField {
            id: format!("fld:{name}"),
            options: Some(
                labels
                    .iter()
                    .map(|l| ((*l).to_string(), format!("opt:{l}")))
                    .collect(),
            ),
        },
    )
}

/// Category, Priority and Phase with every option of their enumeration.
pub fn standard_fields() -> ProjectFields {
    let field = |name: &str, labels: Vec<String>| {
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        select_field(name, &refs)
    };

    [
        field("Category", Category::labels()),
        field("Priority", Priority::labels()),
        field("Phase", Phase::labels()),
        (
            "Title".to_string(),
            ProjectField {
                id: "fld:Title".to_string(),
                options: None,
            },
        ),
    ]
    .into_iter()
    .collect()
}

pub fn task(id: &str, title: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        body: None,
        category: Category::Production,
        priority: Priority::High,
        phase: Phase::Foundation,
        time_estimate: "2 hours".to_string(),
        release_types: vec![ReleaseType::All],
        depends_on: Vec::new(),
    }
}

/// Write a task document to a temp file.
pub fn tasks_file(doc: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(doc.as_bytes()).expect("write task document");
    file
}

pub const THREE_TASKS: &str = r#"{
    "version": "1.0",
    "tasks": [
        {
            "id": "t1",
            "title": "Finalize tracklist",
            "category": "Production",
            "priority": "High",
            "phase": "Phase 0: Foundation",
            "time_estimate": "2 hours"
        },
        {
            "id": "t2",
            "title": "Music video treatment",
            "body": "Pitch two directors",
            "category": "Content",
            "priority": "Medium",
            "phase": "Phase 6: Content Creation",
            "time_estimate": "1 week",
            "release_types": ["Video"],
            "depends_on": ["t1"]
        },
        {
            "id": "t3",
            "title": "Pitch to playlists",
            "category": "Marketing",
            "priority": "Critical",
            "phase": "Phase 7: Pre-Release Campaign",
            "time_estimate": "3 days",
            "release_types": ["Album", "Single"]
        }
    ]
}"#;
