//! Author identity resolution
//!
//! Loads the stored author record, asks only for the fields that are still
//! missing and optionally persists the merged result.

use aurora_core::config::AuthorStore;
use aurora_core::types::{AuthorField, AuthorInfo};
use aurora_core::Result;
use tracing::{debug, info, warn};

/// Interactive source of author fields.
///
/// Implementations are expected to enforce their own input rules (a
/// non-empty name, a well-formed email when one is given). Returning an
/// error aborts resolution.
pub trait AuthorPrompter {
    /// Required author name
    fn name(&mut self) -> Result<String>;

    /// Optional email; an empty string means "none"
    fn email(&mut self) -> Result<String>;

    /// Optional company; an empty string means "none"
    fn company(&mut self) -> Result<String>;

    /// Whether newly collected fields should be saved for next time
    fn confirm_save(&mut self) -> Result<bool>;
}

/// Resolve the author identity used to populate manifests.
///
/// A missing or unreadable store is treated as an empty record. A failure
/// to persist is logged and otherwise ignored.
pub fn resolve_author_info(
    store: &AuthorStore,
    prompter: &mut dyn AuthorPrompter,
) -> Result<AuthorInfo> {
    let mut info = match store.load() {
        Ok(Some(info)) => {
            info!("Loaded author information from {}", store.path().display());
            info
        }
        Ok(None) => {
            info!("Author information file not found at {}", store.path().display());
            AuthorInfo::default()
        }
        Err(e) => {
            warn!("Error reading author information: {}", e);
            AuthorInfo::default()
        }
    };

    let missing = info.missing_fields();
    if missing.is_empty() {
        debug!("Author information complete, no prompts needed");
        return Ok(info);
    }

    let mut answers = AuthorInfo::default();
    for field in missing {
        match field {
            AuthorField::Name => answers.name = Some(prompter.name()?),
            AuthorField::Email => answers.email = Some(prompter.email()?),
            AuthorField::Company => answers.company = Some(prompter.company()?),
        }
    }
    info.merge(answers);

    if prompter.confirm_save()? {
        match store.save(&info) {
            Ok(()) => info!("Author information saved to {}", store.path().display()),
            Err(e) => warn!("Error saving author information: {}", e),
        }
    }

    Ok(info)
}
