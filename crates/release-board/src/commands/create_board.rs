//! Create-board command: create a project, add fields, upload tasks.

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::info;

use crate::board::{create_board, provision_fields};
use crate::config::BoardConfig;
use crate::entities::{ProjectMetadata, ReleaseType, Task, TaskList};
use crate::errors::{BoardError, BoardResult};
use crate::gh::{GhCli, ProjectGateway};
use crate::storage::load_tasks;
use crate::ui;
use crate::upload::{upload_tasks, UploadReport};

/// Create a GitHub project for a release and populate it with tasks.
#[derive(Args, Debug, Clone, Default)]
pub struct CreateBoardCommand {
    /// Print the gh commands that would run instead of running them.
    #[arg(long, visible_alias = "simulate")]
    pub dry_run: bool,

    /// Release title (prompted for when omitted).
    #[arg(long)]
    pub title: Option<String>,

    /// Only upload tasks that apply to this release type
    /// (Album, EP, Single, Video, All).
    #[arg(long, value_name = "TYPE")]
    pub release_type: Option<ReleaseType>,
}

impl CreateBoardCommand {
    /// Run the command against the real `gh` CLI.
    pub fn run(&self, config: &BoardConfig) -> Result<()> {
        let title = match &self.title {
            Some(title) => title.clone(),
            None => Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Release title")
                .interact_text()?,
        };

        let gateway = GhCli::new(&config.gh_program);
        self.execute(&gateway, config, &title)
            .context("Failed to create project")?;
        Ok(())
    }

    /// Run the command with an already known title against any gateway.
    pub fn execute<G: ProjectGateway + ?Sized>(
        &self,
        gateway: &G,
        config: &BoardConfig,
        title: &str,
    ) -> BoardResult<UploadReport> {
        if self.dry_run {
            self.simulate(gateway, config, title)
        } else {
            self.apply(gateway, config, title)
        }
    }

    fn simulate<G: ProjectGateway + ?Sized>(
        &self,
        gateway: &G,
        config: &BoardConfig,
        title: &str,
    ) -> BoardResult<UploadReport> {
        ui::print_section(&format!("Dry run: {title}"));

        create_board(gateway, title, &config.owner, true)?;
        provision_fields(gateway, 0, &config.owner, true)?;

        let mut placeholder = ProjectMetadata::placeholder(title, config.owner.clone());
        let report = match load_tasks(&config.tasks_file) {
            Ok(list) => upload_tasks(gateway, &mut placeholder, &self.select(list), true)?,
            Err(e) => {
                ui::print_warning(&format!("Could not load tasks for dry run: {e}"));
                UploadReport::default()
            }
        };

        ui::print_success("Dry run complete.");
        Ok(report)
    }

    fn apply<G: ProjectGateway + ?Sized>(
        &self,
        gateway: &G,
        config: &BoardConfig,
        title: &str,
    ) -> BoardResult<UploadReport> {
        ui::print_section(&format!("Creating project: {title}"));

        let mut project = create_board(gateway, title, &config.owner, false)?
            .ok_or_else(|| BoardError::schema("gh returned no project"))?;
        ui::print_success(&format!("Project created successfully: {}", project.url));

        ui::print_step("Creating custom fields...");
        provision_fields(gateway, project.number, &project.owner, false)?;
        ui::print_success("Custom fields created successfully.");

        ui::print_step("Loading and creating tasks...");
        let tasks = self.select(load_tasks(&config.tasks_file)?);
        info!(count = tasks.len(), release_type = ?self.release_type, "Uploading tasks");

        let report = match upload_tasks(gateway, &mut project, &tasks, false) {
            Ok(report) => report,
            Err(e) => {
                if let BoardError::TotalBatchFailure { failures } = &e {
                    ui::print_failures(failures);
                }
                return Err(e);
            }
        };

        if report.is_success() {
            ui::print_success("Tasks created successfully.");
        } else {
            ui::print_failures(&report.failures);
        }
        report.into_result()
    }

    fn select(&self, list: TaskList) -> Vec<Task> {
        match self.release_type {
            Some(release_type) => list.filter_by_release_type(release_type),
            None => list.tasks,
        }
    }
}
