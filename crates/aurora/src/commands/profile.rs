//! Profile commands (create, remove, account)

use anyhow::{Context, Result};
use aurora_core::config::{AuthorStore, ProfileStore};
use aurora_core::types::Profile;
use aurora_extensions::resolve_author_info;

use crate::cli::{AccountAction, ProfileArgs};
use crate::output;
use crate::prompts::{self, TerminalAuthorPrompter};
use crate::utils::current_dir;

/// Run the action selected by the profile flags
pub async fn run(args: ProfileArgs) -> Result<()> {
    if args.create {
        create()
    } else if args.remove {
        remove()
    } else if let Some(action) = args.account {
        account(action);
        Ok(())
    } else {
        output::error("No valid profile command provided.");
        Ok(())
    }
}

fn create() -> Result<()> {
    let store = AuthorStore::default_location().context("Failed to locate author configuration")?;
    let author = resolve_author_info(&store, &mut TerminalAuthorPrompter)?;

    let (company, website) = prompts::profile_details(
        author.company.as_deref().unwrap_or_default(),
        author.website.as_deref().unwrap_or_default(),
    )?;

    let profile = Profile {
        author: author.name.unwrap_or_default(),
        company,
        website,
    };

    let profiles = ProfileStore::in_dir(&current_dir()?);
    profiles.save(&profile)?;

    output::success("Profile created successfully.");
    output::kv("Path", &profiles.path().display().to_string());
    Ok(())
}

fn remove() -> Result<()> {
    let profiles = ProfileStore::in_dir(&current_dir()?);
    if !profiles.exists() {
        return Err(aurora_core::Error::not_found("Profile").into());
    }

    let confirmed = prompts::confirm(
        "Are you sure you want to delete the profile? This action cannot be undone.",
    )?;
    if !confirmed {
        output::warning("Profile removal cancelled.");
        return Ok(());
    }

    profiles.remove()?;
    output::success("Profile removed successfully.");
    Ok(())
}

fn account(action: AccountAction) {
    output::warning(&format!(
        "Account {} is not available yet: implementation pending.",
        action
    ));
}
