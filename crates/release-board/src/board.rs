//! Board creation and standard field provisioning.

use tracing::info;

use crate::entities::{FieldSpec, ProjectMetadata};
use crate::errors::BoardResult;
use crate::gh::{GhCommand, ProjectGateway};
use crate::ui;

/// Create a new board.
///
/// In a dry run nothing is executed: the `gh` command line is printed and
/// `None` is returned, so callers must supply their own placeholder board.
pub fn create_board<G: ProjectGateway + ?Sized>(
    gateway: &G,
    title: &str,
    owner: &str,
    dry_run: bool,
) -> BoardResult<Option<ProjectMetadata>> {
    if dry_run {
        ui::print_dry_run(&GhCommand::project_create(title, owner).display_line());
        return Ok(None);
    }

    gateway.create_project(title, owner).map(Some)
}

/// Create the Category, Priority and Phase single-select fields.
///
/// No check is made for fields that already exist; `gh` rejects duplicates
/// and that error is returned as-is.
pub fn provision_fields<G: ProjectGateway + ?Sized>(
    gateway: &G,
    project_number: u64,
    owner: &str,
    dry_run: bool,
) -> BoardResult<()> {
    for field in FieldSpec::standard() {
        if dry_run {
            let cmd = GhCommand::field_create(project_number, owner, &field);
            ui::print_dry_run(&cmd.display_line());
            continue;
        }

        gateway.create_field(project_number, owner, &field)?;
        info!(field = %field.name, options = field.options.len(), "Provisioned field");
    }
    Ok(())
}
