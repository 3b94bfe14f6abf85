//! # aurora-extensions
//!
//! Extension authoring for the Aurora CLI:
//! - Author identity resolution with a pluggable prompter
//! - Manifest assembly and materialization from language templates
//! - Local installation into the editor's extension directory
//! - Management of the `./extensions` workspace
//!
//! ```no_run
//! use aurora_core::types::AuthorInfo;
//! use aurora_extensions::{build_manifest, materialize, ExtensionAnswers, MaterializeOptions};
//!
//! # async fn example(answers: ExtensionAnswers, author: AuthorInfo) -> aurora_core::Result<()> {
//! let manifest = build_manifest(&answers, &author);
//! let options = MaterializeOptions::new(".", "templates");
//! let dest = materialize(&manifest, &answers, &options).await?;
//! println!("created {}", dest.display());
//! # Ok(())
//! # }
//! ```

pub mod author;
pub mod copy;
pub mod install;
pub mod manifest;
pub mod materialize;
pub mod workspace;

pub use author::{resolve_author_info, AuthorPrompter};
pub use install::{install_extension, install_into, load_manifest};
pub use manifest::{build_manifest, ExtensionAnswers};
pub use materialize::{materialize, MaterializeOptions};
pub use workspace::{prepare_upload, ExtensionWorkspace, EXTENSIONS_DIR};
