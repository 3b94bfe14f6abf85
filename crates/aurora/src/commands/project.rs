//! Project commands (create, open, delete)
//!
//! All of them are gated to macOS, where the editor is available.

use anyhow::{anyhow, Result};
use aurora_core::utils::is_single_component;
use aurora_core::Platform;
use aurora_projects::process::spawn_detached;
use aurora_projects::scaffold::PACKAGE_JSON;
use aurora_projects::{create_project, delete_project, is_project_dir, NewProject};
use camino::{Utf8Path, Utf8PathBuf};

use crate::cli::ProjectArgs;
use crate::output;
use crate::prompts;
use crate::utils::current_dir;

/// Executable that opens a directory in Aurora Editor
pub const EDITOR_COMMAND: &str = "auroraeditor";

/// Run the action selected by the project flags
pub async fn run(args: ProjectArgs) -> Result<()> {
    let operation = if args.create {
        "create project"
    } else if args.open {
        "open project"
    } else if args.delete {
        "delete project"
    } else {
        output::error("No valid project command provided.");
        return Ok(());
    };

    Platform::current().require_macos(operation)?;
    let cwd = utf8_current_dir()?;

    if args.create {
        create(&cwd).await
    } else if args.open {
        open(&cwd)
    } else {
        delete(&cwd)
    }
}

async fn create(cwd: &Utf8Path) -> Result<()> {
    let (name, project_type, directory) = prompts::new_project(cwd.as_str())?;
    let project = NewProject::new(name, project_type, Utf8PathBuf::from(directory));

    output::info(&format!(
        "Creating {} project \"{}\" in {}...",
        project.project_type, project.name, project.directory
    ));
    let path = create_project(&project).await?;

    output::success(&format!(
        "Project \"{}\" created successfully at {}",
        project.name, path
    ));
    open_in_editor(&path);
    Ok(())
}

fn open(cwd: &Utf8Path) -> Result<()> {
    if !is_project_dir(cwd) {
        return Err(aurora_core::Error::not_found(format!("{} in {}", PACKAGE_JSON, cwd)).into());
    }

    output::success(&format!("Opening project in {}", cwd));
    open_in_editor(cwd);
    Ok(())
}

fn delete(cwd: &Utf8Path) -> Result<()> {
    let name = prompts::required_text(
        "Enter the project name to delete",
        "Project name cannot be empty.",
    )?;
    let confirmed = prompts::confirm(&format!(
        "Are you sure you want to delete the project \"{}\"?",
        name
    ))?;

    if !is_single_component(&name) || !cwd.join(&name).is_dir() {
        return Err(aurora_projects::Error::project_not_found(&name).into());
    }
    if !confirmed {
        output::warning("Project deletion cancelled.");
        return Ok(());
    }

    delete_project(cwd, &name)?;
    output::success(&format!("Project \"{}\" has been deleted.", name));
    Ok(())
}

/// Launch the editor without waiting for it
fn open_in_editor(path: &Utf8Path) {
    match spawn_detached(EDITOR_COMMAND, &[path.as_str()]) {
        Ok(()) => output::success("Project opened in Aurora Editor."),
        Err(e) => output::error(&format!("Failed to open project in Aurora Editor: {}", e)),
    }
}

fn utf8_current_dir() -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(current_dir()?)
        .map_err(|path| anyhow!("Current directory is not valid UTF-8: {}", path.display()))
}
