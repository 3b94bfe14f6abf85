//! # aurora-core
//!
//! Core library for the Aurora CLI providing:
//! - Extension manifest, author and profile types
//! - JSON Schema validation against the embedded rule sets
//! - Author and profile configuration stores
//! - Platform detection for OS-gated commands

pub mod config;
pub mod error;
pub mod platform;
pub mod schema;
pub mod types;
pub mod utils;

pub use config::{AuthorStore, ProfileStore};
pub use error::{Error, Result};
pub use platform::Platform;
pub use schema::SchemaValidator;
pub use utils::get_home_dir;
