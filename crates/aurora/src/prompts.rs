//! Interactive prompts built on dialoguer

use anyhow::Result;
use aurora_core::types::{ExtensionType, DEFAULT_LICENSE, EDITOR_VERSIONS, EXTENSION_CATEGORIES};
use aurora_core::utils::{is_single_component, is_valid_email};
use aurora_extensions::{AuthorPrompter, ExtensionAnswers};
use aurora_projects::ProjectType;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use std::io;

use crate::output;

/// Author prompts shown on the terminal
pub struct TerminalAuthorPrompter;

impl AuthorPrompter for TerminalAuthorPrompter {
    fn name(&mut self) -> aurora_core::Result<String> {
        Input::<String>::new()
            .with_prompt("Enter the author name")
            .validate_with(|input: &String| required(input, "Author name is required."))
            .interact_text()
            .map_err(prompt_error)
    }

    fn email(&mut self) -> aurora_core::Result<String> {
        Input::<String>::new()
            .with_prompt("Enter the author email")
            .allow_empty(true)
            .validate_with(|input: &String| {
                if input.is_empty() || is_valid_email(input) {
                    Ok(())
                } else {
                    Err("Please enter a valid email address.")
                }
            })
            .interact_text()
            .map_err(prompt_error)
    }

    fn company(&mut self) -> aurora_core::Result<String> {
        Input::<String>::new()
            .with_prompt("Enter the author company (optional)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn confirm_save(&mut self) -> aurora_core::Result<bool> {
        Confirm::new()
            .with_prompt("Would you like to save this author information for future use?")
            .default(true)
            .interact()
            .map_err(prompt_error)
    }
}

/// Ask for everything `extension --create` needs besides the author
pub fn extension_answers() -> Result<ExtensionAnswers> {
    let types: Vec<String> = ExtensionType::ALL.iter().map(|t| t.to_string()).collect();
    let type_index = Select::new()
        .with_prompt("Choose the language for the extension")
        .items(&types)
        .default(0)
        .interact()?;

    let name = Input::<String>::new()
        .with_prompt("Enter the name of the extension")
        .validate_with(|input: &String| directory_name(input, "Extension name is required."))
        .interact_text()?;

    let description = Input::<String>::new()
        .with_prompt("Enter a short description of the extension")
        .validate_with(|input: &String| required(input, "Description is required."))
        .interact_text()?;

    let categories = pick_at_least_one(
        "Select the categories the extension falls into",
        EXTENSION_CATEGORIES,
        "At least one category must be selected.",
    )?;

    let license = Input::<String>::new()
        .with_prompt("Enter the license type")
        .default(DEFAULT_LICENSE.to_string())
        .validate_with(|input: &String| required(input, "License is required."))
        .interact_text()?;

    let editor_versions = pick_at_least_one(
        "Select the supported editor versions",
        EDITOR_VERSIONS,
        "At least one editor version must be selected.",
    )?;

    let git_support = Confirm::new()
        .with_prompt("Do you want to initialize a Git repository?")
        .default(true)
        .interact()?;

    Ok(ExtensionAnswers {
        extension_type: ExtensionType::ALL[type_index],
        name,
        description,
        categories,
        license,
        editor_versions,
        git_support,
        homepage: None,
    })
}

/// Company and website for a profile, pre-filled from the author record
pub fn profile_details(company: &str, website: &str) -> Result<(String, String)> {
    let company = Input::<String>::new()
        .with_prompt("Enter your company name (optional)")
        .default(company.to_string())
        .allow_empty(true)
        .interact_text()?;

    let website = Input::<String>::new()
        .with_prompt("Enter your website URL (optional)")
        .default(website.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok((company, website))
}

/// Name, type and parent directory for a new project
pub fn new_project(default_dir: &str) -> Result<(String, ProjectType, String)> {
    let name = Input::<String>::new()
        .with_prompt("Enter the project name")
        .validate_with(|input: &String| required(input, "Project name cannot be empty."))
        .interact_text()?;

    let types = ProjectType::all();
    let labels: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
    let index = Select::new()
        .with_prompt("Select the project type")
        .items(&labels)
        .default(0)
        .interact()?;

    let directory = Input::<String>::new()
        .with_prompt("Enter the directory where the project should be created")
        .default(default_dir.to_string())
        .validate_with(|input: &String| required(input, "Directory path cannot be empty."))
        .interact_text()?;

    Ok((name, types[index], directory))
}

/// Free-text name prompt that must not be empty
pub fn required_text(prompt: &str, empty_message: &'static str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(move |input: &String| required(input, empty_message))
        .interact_text()?)
}

/// Yes/no question defaulting to "no"
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

fn pick_at_least_one(prompt: &str, items: &[&str], empty_message: &str) -> Result<Vec<String>> {
    loop {
        let picked = MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .interact()?;

        if !picked.is_empty() {
            return Ok(picked.into_iter().map(|i| items[i].to_string()).collect());
        }
        output::warning(empty_message);
    }
}

fn required(input: &str, message: &'static str) -> std::result::Result<(), &'static str> {
    if input.trim().is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

/// Non-empty and usable as a single directory name
fn directory_name(
    input: &str,
    empty_message: &'static str,
) -> std::result::Result<(), &'static str> {
    required(input, empty_message)?;
    if is_single_component(input) {
        Ok(())
    } else {
        Err("Name must not contain path separators or be \".\" or \"..\".")
    }
}

/// Map a dialoguer failure onto the core error type.
///
/// An interrupted read means the user aborted the prompt.
fn prompt_error(err: dialoguer::Error) -> aurora_core::Error {
    let err = io::Error::from(err);
    if err.kind() == io::ErrorKind::Interrupted {
        aurora_core::Error::Cancelled
    } else {
        aurora_core::Error::Io(err)
    }
}
