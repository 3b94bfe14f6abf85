//! Extension commands (create, list, upload, update, remove, deprecate, install)

use anyhow::{Context, Result};
use aurora_core::config::AuthorStore;
use aurora_extensions::{
    build_manifest, install_extension, materialize, prepare_upload, resolve_author_info,
    ExtensionWorkspace, MaterializeOptions,
};
use std::path::Path;

use crate::cli::{ExtensionAction, ExtensionArgs};
use crate::output;
use crate::prompts::{self, TerminalAuthorPrompter};
use crate::utils::{current_dir, get_templates_root};

/// Run the action selected by the extension flags
pub async fn run(args: ExtensionArgs) -> Result<()> {
    let Some(action) = args.action() else {
        output::error("No valid extension command provided.");
        return Ok(());
    };

    let cwd = current_dir()?;
    match action {
        ExtensionAction::Create => create(&cwd).await,
        ExtensionAction::List => list(&cwd),
        ExtensionAction::Upload => upload(&cwd),
        ExtensionAction::Update(id) => update(&cwd, &id),
        ExtensionAction::Remove(id) => remove(&cwd, &id),
        ExtensionAction::Deprecate(id) => deprecate(&cwd, &id),
        ExtensionAction::Install => install(&cwd),
    }
}

async fn create(cwd: &Path) -> Result<()> {
    let store = AuthorStore::default_location().context("Failed to locate author configuration")?;
    let author = resolve_author_info(&store, &mut TerminalAuthorPrompter)?;
    let answers = prompts::extension_answers()?;

    let manifest = build_manifest(&answers, &author);
    let options = MaterializeOptions::new(cwd, get_templates_root());

    let spinner = output::spinner(&format!("Creating extension {}...", manifest.name));
    let result = materialize(&manifest, &answers, &options).await;
    spinner.finish_and_clear();
    let dest = result?;

    output::success(&format!(
        "Extension \"{}\" created successfully at {}.",
        manifest.name,
        dest.display()
    ));
    Ok(())
}

fn list(cwd: &Path) -> Result<()> {
    match ExtensionWorkspace::new(cwd).list()? {
        None => output::error("No extensions directory found."),
        Some(names) if names.is_empty() => output::warning("No extensions found."),
        Some(names) => {
            output::success("Created extensions:");
            for (index, name) in names.iter().enumerate() {
                output::numbered(index + 1, name);
            }
        }
    }
    Ok(())
}

fn upload(cwd: &Path) -> Result<()> {
    let manifest = prepare_upload(cwd)?;
    output::info(&format!(
        "Uploading extension {} v{}...",
        manifest.name, manifest.version
    ));
    output::warning("No extension registry is available yet; nothing was uploaded.");
    Ok(())
}

fn update(cwd: &Path, id: &str) -> Result<()> {
    output::info(&format!("Updating extension with ID: {}", id));
    let manifest = ExtensionWorkspace::new(cwd).update(id)?;

    output::success(&format!("Extension with ID {} is valid", id));
    output::kv("Name", &manifest.name);
    output::kv("Version", &manifest.version);
    Ok(())
}

fn remove(cwd: &Path, id: &str) -> Result<()> {
    ExtensionWorkspace::new(cwd).remove(id)?;
    output::success(&format!("Extension with ID {} has been removed.", id));
    Ok(())
}

fn deprecate(cwd: &Path, id: &str) -> Result<()> {
    output::warning(&format!("Deprecating extension with ID: {}", id));
    ExtensionWorkspace::new(cwd).deprecate(id)?;
    output::success(&format!("Extension with ID {} is now deprecated.", id));
    Ok(())
}

fn install(cwd: &Path) -> Result<()> {
    let target = install_extension(cwd)?;
    output::success(&format!(
        "Extension installed successfully to {}.",
        target.display()
    ));
    Ok(())
}
