//! Extension type definitions matching extension.schema.json

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version every newly created extension starts at
pub const INITIAL_VERSION: &str = "0.0.1";

/// License offered by default when creating an extension
pub const DEFAULT_LICENSE: &str = "MIT";

/// File name of the extension manifest
pub const MANIFEST_FILE: &str = "extension.json";

/// Categories offered when creating an extension.
///
/// The schema only requires at least one string; membership is enforced by
/// the prompt, not by validation.
pub const EXTENSION_CATEGORIES: &[&str] = &[
    "Programming Languages",
    "Snippets",
    "Linters",
    "Themes",
    "Debuggers",
    "Formatters",
    "Keymaps",
    "SCM Providers",
    "Other",
    "Extension Packs",
    "Language Packs",
    "Data Science",
    "Machine Learning",
    "Visualization",
    "Notebooks",
    "Education",
    "Testing",
];

/// Editor releases an extension can declare support for
pub const EDITOR_VERSIONS: &[&str] = &["1.0.0", "1.1.0", "1.2.0"];

/// Extension manifest as written to `extension.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionManifest {
    /// Extension name, also the destination directory name
    pub name: String,

    /// Short description
    pub description: String,

    /// Icon path (may be empty)
    #[serde(default)]
    pub icon: String,

    /// Marketplace categories
    pub categories: Vec<String>,

    /// Semantic version (`major.minor.patch`)
    pub version: String,

    /// Implementation language
    #[serde(rename = "type")]
    pub extension_type: ExtensionType,

    /// Author block
    pub author: ManifestAuthor,

    /// License identifier
    pub license: String,

    /// Supported editor versions
    pub editor: Vec<String>,

    /// Homepage URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// Unknown top-level fields, preserved on rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExtensionManifest {
    /// Serialize to the JSON value checked by the schema
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Render as 2-space indented JSON
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Whether the manifest has been marked deprecated
    pub fn is_deprecated(&self) -> bool {
        self.extra
            .get("deprecated")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Mark the manifest as deprecated
    pub fn mark_deprecated(&mut self) {
        self.extra.insert("deprecated".to_string(), Value::Bool(true));
    }
}

/// Author block inside a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestAuthor {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
}

/// Implementation language of an extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionType {
    Swift,
    Javascript,
    Typescript,
}

impl ExtensionType {
    /// All supported languages, in prompt order
    pub const ALL: [ExtensionType; 3] = [
        ExtensionType::Swift,
        ExtensionType::Javascript,
        ExtensionType::Typescript,
    ];

    /// Key of the template directory under the templates root
    pub fn template_key(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// File extension of the installed bundle
    pub fn bundle_extension(&self) -> &'static str {
        match self {
            ExtensionType::Swift => "AEext",
            ExtensionType::Javascript | ExtensionType::Typescript => "JSext",
        }
    }
}

impl std::fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtensionType::Swift => write!(f, "swift"),
            ExtensionType::Javascript => write!(f, "javascript"),
            ExtensionType::Typescript => write!(f, "typescript"),
        }
    }
}

impl std::str::FromStr for ExtensionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "swift" => Ok(ExtensionType::Swift),
            "javascript" => Ok(ExtensionType::Javascript),
            "typescript" => Ok(ExtensionType::Typescript),
            other => Err(format!("Unknown extension type: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manifest_field_names() {
        let manifest: ExtensionManifest = serde_json::from_value(json!({
            "name": "demo",
            "description": "d",
            "icon": "",
            "categories": ["Snippets"],
            "version": "0.0.1",
            "type": "typescript",
            "author": { "name": "A" },
            "license": "MIT",
            "editor": ["1.0.0"]
        }))
        .unwrap();

        assert_eq!(manifest.extension_type, ExtensionType::Typescript);
        assert_eq!(manifest.author.email, "");

        let value = manifest.to_value().unwrap();
        assert_eq!(value["type"], "typescript");
        assert!(value.get("homepage").is_none());
        assert!(value.get("extension_type").is_none());
    }

    #[test]
    fn test_unknown_fields_survive_rewrite() {
        let mut manifest: ExtensionManifest = serde_json::from_value(json!({
            "name": "demo",
            "description": "d",
            "icon": "",
            "categories": ["Snippets"],
            "version": "0.0.1",
            "type": "swift",
            "author": { "name": "A", "email": "", "company": "" },
            "license": "MIT",
            "editor": ["1.0.0"],
            "repository": "https://example.com/demo.git"
        }))
        .unwrap();

        assert!(!manifest.is_deprecated());
        manifest.mark_deprecated();

        let value = manifest.to_value().unwrap();
        assert_eq!(value["repository"], "https://example.com/demo.git");
        assert_eq!(value["deprecated"], true);
    }

    #[test]
    fn test_bundle_extension() {
        assert_eq!(ExtensionType::Swift.bundle_extension(), "AEext");
        assert_eq!(ExtensionType::Javascript.bundle_extension(), "JSext");
        assert_eq!(ExtensionType::Typescript.bundle_extension(), "JSext");
    }

    #[test]
    fn test_type_parsing_is_case_insensitive() {
        assert_eq!(
            "TypeScript".parse::<ExtensionType>().unwrap(),
            ExtensionType::Typescript
        );
        assert!("python".parse::<ExtensionType>().is_err());
        assert_eq!(ExtensionType::Swift.template_key(), "swift");
    }
}
