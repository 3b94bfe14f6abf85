//! JSON Schema validation for Aurora documents
//!
//! The rule sets live as data under `schemas/` and are embedded into the
//! binary. Each `<name>.schema.json` is compiled once and looked up by name
//! (`extension`, `author`, `profile`).

use crate::error::{Error, Result};
use jsonschema::Validator;
use rust_embed::RustEmbed;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Name of the extension manifest schema
pub const EXTENSION_SCHEMA: &str = "extension";
/// Name of the author configuration schema
pub const AUTHOR_SCHEMA: &str = "author";
/// Name of the profile file schema
pub const PROFILE_SCHEMA: &str = "profile";

/// Embedded schema files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../schemas/"]
#[prefix = ""]
struct EmbeddedSchemas;

/// Schema validator with pre-compiled schemas
#[derive(Debug)]
pub struct SchemaValidator {
    /// Compiled schemas by name
    schemas: HashMap<String, Validator>,
}

/// Global schema validator instance
static VALIDATOR: OnceLock<SchemaValidator> = OnceLock::new();

impl SchemaValidator {
    /// Create a new schema validator with embedded schemas
    pub fn new() -> Result<Self> {
        let mut schemas = HashMap::new();

        for file in EmbeddedSchemas::iter() {
            if !file.ends_with(".schema.json") {
                continue;
            }
            let name = file.trim_end_matches(".schema.json").to_string();
            debug!("Loading embedded schema: {}", name);

            if let Some(content) = EmbeddedSchemas::get(&file) {
                let json_str = std::str::from_utf8(&content.data).map_err(|_| {
                    Error::invalid_config(format!("Invalid UTF-8 in schema: {}", file))
                })?;
                let schema_value: Value = serde_json::from_str(json_str)?;
                schemas.insert(name.clone(), compile(&name, &schema_value)?);
            }
        }

        if schemas.is_empty() {
            return Err(Error::schema_not_found("embedded schemas"));
        }

        Ok(Self { schemas })
    }

    /// Get the global validator instance
    pub fn global() -> Result<&'static SchemaValidator> {
        if let Some(validator) = VALIDATOR.get() {
            return Ok(validator);
        }
        let validator = Self::new()?;
        Ok(VALIDATOR.get_or_init(|| validator))
    }

    /// Validate a JSON value against a schema.
    ///
    /// All violations are collected; the error lists them as
    /// `<field-path> <reason>` pairs joined by `, `. Violations on the
    /// document root (such as a missing required property) have an empty
    /// path and are reported as the bare reason.
    pub fn validate(&self, value: &Value, schema_name: &str) -> Result<()> {
        let schema = self
            .schemas
            .get(schema_name)
            .ok_or_else(|| Error::schema_not_found(schema_name))?;

        let errors: Vec<String> = schema
            .iter_errors(value)
            .map(|e| {
                let path = e.instance_path().to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{} {}", path, e)
                }
            })
            .collect();

        if !errors.is_empty() {
            return Err(Error::schema_validation(errors));
        }

        Ok(())
    }

    /// Validate an extension manifest
    pub fn validate_manifest(&self, value: &Value) -> Result<()> {
        self.validate(value, EXTENSION_SCHEMA)
    }

    /// Validate a JSON file against a schema
    pub fn validate_file(&self, path: &std::path::Path, schema_name: &str) -> Result<Value> {
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        self.validate(&value, schema_name)?;
        Ok(value)
    }

    /// Check if a schema exists
    pub fn has_schema(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }
}

fn compile(name: &str, schema: &Value) -> Result<Validator> {
    jsonschema::options()
        .should_validate_formats(true)
        .build(schema)
        .map_err(|e| Error::invalid_config(format!("Failed to compile schema {}: {}", name, e)))
}
