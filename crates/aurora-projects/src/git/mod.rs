//! Git operations module
//!
//! Thin async wrappers over the `git` executable.
//!
//! ```no_run
//! use aurora_projects::git::init_repository;
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let path = Utf8Path::new("/tmp/my-repo");
//! init_repository(path).await?;
//! # Ok(())
//! # }
//! ```

mod init;

pub use init::{check_git_available, init_repository};
