//! Error types for aurora-projects

use thiserror::Error;

/// Result type alias using aurora-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project management error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project already exists
    #[error("A directory named \"{name}\" already exists at: {path}")]
    ProjectExists { name: String, path: String },

    /// Project not found
    #[error("Project \"{name}\" does not exist")]
    ProjectNotFound { name: String },

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// Directory to initialize is missing
    #[error("Repository directory not found at: {path}")]
    RepoNotFound { path: String },

    /// Command not found
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// External command exited unsuccessfully
    #[error("Command \"{command}\" exited with code {code}")]
    CommandFailed { command: String, code: i32 },

    /// JSON serialization error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error(transparent)]
    Core(#[from] aurora_core::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::ProjectExists {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a project not found error
    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::ProjectNotFound { name: name.into() }
    }

    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, code: i32) -> Self {
        Self::CommandFailed {
            command: command.into(),
            code,
        }
    }

    /// Whether this error belongs to the anticipated taxonomy
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Io(_) | Self::JsonParse(_) => false,
            Self::Core(core) => core.is_expected(),
            _ => true,
        }
    }
}
