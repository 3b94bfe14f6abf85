//! User configuration files

mod author_store;
mod profile_store;

pub use author_store::{AuthorStore, AUTHOR_FILE};
pub use profile_store::{ProfileStore, PROFILE_FILE};
