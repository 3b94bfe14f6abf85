//! Shared fixtures for aurora-extensions integration tests

#![allow(dead_code)]

use aurora_core::types::{AuthorInfo, ExtensionType};
use aurora_core::Result;
use aurora_extensions::{AuthorPrompter, ExtensionAnswers, MaterializeOptions};
use std::path::{Path, PathBuf};

/// Template root shipped with the repository
pub fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("templates")
}

/// Options creating extensions in `base` from the shipped templates
pub fn options_in(base: &Path) -> MaterializeOptions {
    MaterializeOptions::new(base, shipped_templates())
}

/// Answers for the `demo` javascript extension
pub fn demo_answers() -> ExtensionAnswers {
    ExtensionAnswers {
        extension_type: ExtensionType::Javascript,
        name: "demo".to_string(),
        description: "d".to_string(),
        categories: vec!["Snippets".to_string()],
        license: "MIT".to_string(),
        editor_versions: vec!["1.0.0".to_string()],
        git_support: false,
        homepage: None,
    }
}

pub fn author(name: &str) -> AuthorInfo {
    AuthorInfo {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Prompter that fails the test if it is ever asked anything
pub struct NoPrompts;

impl AuthorPrompter for NoPrompts {
    fn name(&mut self) -> Result<String> {
        panic!("unexpected name prompt")
    }

    fn email(&mut self) -> Result<String> {
        panic!("unexpected email prompt")
    }

    fn company(&mut self) -> Result<String> {
        panic!("unexpected company prompt")
    }

    fn confirm_save(&mut self) -> Result<bool> {
        panic!("unexpected save prompt")
    }
}
