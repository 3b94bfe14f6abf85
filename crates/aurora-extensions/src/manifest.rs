//! Manifest assembly from prompt answers

use aurora_core::types::{AuthorInfo, ExtensionManifest, ExtensionType, INITIAL_VERSION};
use serde::{Deserialize, Serialize};
use serde_json::Map;

/// Answers collected by the `extension --create` prompts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionAnswers {
    pub extension_type: ExtensionType,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub license: String,
    pub editor_versions: Vec<String>,
    pub git_support: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

/// Build a manifest from answers and the resolved author.
///
/// No validation happens here; the result is checked against the schema
/// before anything is written.
pub fn build_manifest(answers: &ExtensionAnswers, author: &AuthorInfo) -> ExtensionManifest {
    ExtensionManifest {
        name: answers.name.clone(),
        description: answers.description.clone(),
        icon: String::new(),
        categories: answers.categories.clone(),
        version: INITIAL_VERSION.to_string(),
        extension_type: answers.extension_type,
        author: author.to_manifest_author(),
        license: answers.license.clone(),
        editor: answers.editor_versions.clone(),
        homepage: answers.homepage.clone(),
        extra: Map::new(),
    }
}
