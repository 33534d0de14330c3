//! # Release Board
//!
//! Creates a GitHub Project for a music release and fills it from a local
//! task database.
//!
//! Every remote change is a single `gh` CLI invocation made through the
//! [`gh::ProjectGateway`] trait:
//!
//! - [`board`] creates the project and its Category, Priority and Phase fields
//! - [`upload`] creates one item per task and sets those fields
//! - [`storage`] loads and validates the task database
//!
//! Runs are one-way pushes. Nothing is cached or read back beyond the field
//! list needed to map task values to option IDs.
//!
//! ## Example
//!
//! ```rust,ignore
//! use release_board::{gh::GhCli, storage::load_tasks, upload::upload_tasks};
//!
//! let gh = GhCli::default();
//! let mut project = release_board::board::create_board(&gh, "Sojourn", "@me", false)?
//!     .expect("not a dry run");
//! let tasks = load_tasks("data/tasks.json")?;
//! let report = upload_tasks(&gh, &mut project, &tasks.tasks, false)?;
//! ```

pub mod board;
pub mod commands;
pub mod config;
pub mod entities;
pub mod errors;
pub mod gh;
pub mod storage;
pub mod ui;
pub mod upload;

pub use config::BoardConfig;
pub use entities::{Category, Phase, Priority, ProjectMetadata, ReleaseType, Task, TaskList};
pub use errors::{BoardError, BoardResult};
pub use gh::{GhCli, ProjectGateway};
pub use upload::{TaskFailure, UploadReport};
