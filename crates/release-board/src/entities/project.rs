//! Board (GitHub Project) metadata and field descriptors.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Category, Phase, Priority};

/// Default owner passed to `gh`: the authenticated user.
pub const DEFAULT_OWNER: &str = "@me";

/// Name of the Category board field.
pub const CATEGORY_FIELD: &str = "Category";
/// Name of the Priority board field.
pub const PRIORITY_FIELD: &str = "Priority";
/// Name of the Phase board field.
pub const PHASE_FIELD: &str = "Phase";

/// Identity of a board created for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project node ID (used by `item-edit --project-id`)
    pub id: String,

    /// Project number (used by every other `gh project` subcommand)
    pub number: u64,

    /// Browser URL
    pub url: String,

    pub title: String,

    /// Owner login, or `@me`
    pub owner: String,

    /// Field name to field ID. Filled in once fields are fetched; never
    /// written anywhere.
    #[serde(default)]
    pub field_ids: HashMap<String, String>,
}

impl ProjectMetadata {
    /// Stand-in board used to drive dry-run narration.
    pub fn placeholder(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: "dummy_id".to_string(),
            number: 0,
            url: "dummy_url".to_string(),
            title: title.into(),
            owner: owner.into(),
            field_ids: HashMap::new(),
        }
    }

    /// Remember the IDs of the given fields.
    pub fn record_fields(&mut self, fields: &ProjectFields) {
        for (name, field) in &fields.0 {
            self.field_ids.insert(name.clone(), field.id.clone());
        }
    }
}

/// One field on a board as reported by `gh project field-list`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectField {
    pub id: String,

    /// Option label to option ID, present only for single-select fields
    pub options: Option<HashMap<String, String>>,
}

impl ProjectField {
    /// Option ID for a label, if this is a single-select field that has it.
    pub fn option_id(&self, label: &str) -> Option<&str> {
        self.options.as_ref()?.get(label).map(String::as_str)
    }
}

/// All fields on a board, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFields(pub HashMap<String, ProjectField>);

impl ProjectFields {
    pub fn get(&self, name: &str) -> Option<&ProjectField> {
        self.0.get(name)
    }

    /// `(field id, option id)` for setting `field` to `label`, or `None` when
    /// the board has no such field or the field has no such option.
    pub fn resolve(&self, field: &str, label: &str) -> Option<(&str, &str)> {
        let field = self.get(field)?;
        let option = field.option_id(label)?;
        Some((field.id.as_str(), option))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ProjectField)> for ProjectFields {
    fn from_iter<I: IntoIterator<Item = (String, ProjectField)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Data type accepted by `gh project field-create --data-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDataType {
    SingleSelect,
    Text,
}

impl FieldDataType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleSelect => "SINGLE_SELECT",
            Self::Text => "TEXT",
        }
    }
}

impl fmt::Display for FieldDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A custom field to create on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub data_type: FieldDataType,
    /// Option labels, for single-select fields
    pub options: Vec<String>,
}

impl FieldSpec {
    pub fn single_select(name: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            name: name.into(),
            data_type: FieldDataType::SingleSelect,
            options,
        }
    }

    /// Category, Priority and Phase with every option of their enumeration.
    pub fn standard() -> Vec<Self> {
        vec![
            Self::single_select(CATEGORY_FIELD, Category::labels()),
            Self::single_select(PRIORITY_FIELD, Priority::labels()),
            Self::single_select(PHASE_FIELD, Phase::labels()),
        ]
    }
}

/// Value written to an item field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Option ID of a single-select field
    SingleSelect(String),
    /// Literal text
    Text(String),
}
