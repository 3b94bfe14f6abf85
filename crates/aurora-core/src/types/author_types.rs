//! Author identity and profile types

use serde::{Deserialize, Serialize};

use super::ManifestAuthor;

/// Author identity persisted in the user configuration directory.
///
/// Empty strings are treated the same as absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Author fields requested interactively when missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    Name,
    Email,
    Company,
}

impl AuthorInfo {
    /// Fields among name, email and company that still need a value
    pub fn missing_fields(&self) -> Vec<AuthorField> {
        let mut missing = Vec::new();
        if is_blank(&self.name) {
            missing.push(AuthorField::Name);
        }
        if is_blank(&self.email) {
            missing.push(AuthorField::Email);
        }
        if is_blank(&self.company) {
            missing.push(AuthorField::Company);
        }
        missing
    }

    /// Overlay every populated field of `other` onto `self`
    pub fn merge(&mut self, other: AuthorInfo) {
        if !is_blank(&other.name) {
            self.name = other.name;
        }
        if !is_blank(&other.email) {
            self.email = other.email;
        }
        if !is_blank(&other.company) {
            self.company = other.company;
        }
        if !is_blank(&other.website) {
            self.website = other.website;
        }
    }

    /// Author block for an extension manifest.
    ///
    /// Email and company default to empty strings.
    pub fn to_manifest_author(&self) -> ManifestAuthor {
        ManifestAuthor {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            company: self.company.clone().unwrap_or_default(),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Profile written to `profile.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub author: String,
    pub company: String,
    pub website: String,
}
