//! # aurora-projects
//!
//! Project management library for the Aurora CLI providing:
//! - Git repository initialization
//! - External command execution (setup tools, editor launch)
//! - Node, Swift, TypeScript and JavaScript project scaffolding
//!
//! ## Scaffold a project without running setup tools
//!
//! ```no_run
//! use aurora_projects::{create_project, NewProject, ProjectType};
//! use camino::Utf8PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut project = NewProject::new("hello", ProjectType::TypeScript, Utf8PathBuf::from("/tmp"));
//! project.run_setup = false;
//! let path = create_project(&project).await?;
//! assert!(path.join("tsconfig.json").exists());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod git;
pub mod process;
pub mod scaffold;
pub mod types;

pub use error::{Error, Result};
pub use scaffold::{create_project, delete_project, is_project_dir};
pub use types::{NewProject, ProjectType};
