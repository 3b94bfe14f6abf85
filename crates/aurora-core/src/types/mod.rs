//! Type definitions for Aurora manifests, authors and profiles

mod author_types;
mod extension_types;

pub use author_types::*;
pub use extension_types::*;
