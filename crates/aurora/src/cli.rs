//! CLI argument parsing with clap

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Aurora CLI tool for generating extensions and managing profiles
#[derive(Parser, Debug)]
#[command(name = "aurora")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage Aurora Editor extensions
    Extension(ExtensionArgs),

    /// Manage user profiles and Aurora Editor account
    Profile(ProfileArgs),

    /// Manage development projects
    Project(ProjectArgs),

    /// Display help information
    Help(HelpArgs),
}

// Extension command: exactly one action per invocation
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ExtensionArgs {
    /// Create a new extension
    #[arg(long)]
    pub create: bool,

    /// List all extensions
    #[arg(long)]
    pub list: bool,

    /// Upload an extension
    #[arg(long)]
    pub upload: bool,

    /// Update an extension by ID
    #[arg(long, value_name = "ID")]
    pub update: Option<String>,

    /// Remove an extension by ID
    #[arg(long, value_name = "ID")]
    pub remove: Option<String>,

    /// Deprecate an extension by ID
    #[arg(long, value_name = "ID")]
    pub deprecate: Option<String>,

    /// Install the extension in the current directory
    #[arg(long)]
    pub install: bool,
}

/// Action selected by `aurora extension`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionAction {
    Create,
    List,
    Upload,
    Update(String),
    Remove(String),
    Deprecate(String),
    Install,
}

impl ExtensionArgs {
    pub fn action(self) -> Option<ExtensionAction> {
        if self.create {
            Some(ExtensionAction::Create)
        } else if self.list {
            Some(ExtensionAction::List)
        } else if self.upload {
            Some(ExtensionAction::Upload)
        } else if let Some(id) = self.update {
            Some(ExtensionAction::Update(id))
        } else if let Some(id) = self.remove {
            Some(ExtensionAction::Remove(id))
        } else if let Some(id) = self.deprecate {
            Some(ExtensionAction::Deprecate(id))
        } else if self.install {
            Some(ExtensionAction::Install)
        } else {
            None
        }
    }
}

// Profile command
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ProfileArgs {
    /// Create a new profile
    #[arg(long)]
    pub create: bool,

    /// Remove the existing profile
    #[arg(long)]
    pub remove: bool,

    /// Manage Aurora account (create, link, unlink)
    #[arg(long, value_enum, value_name = "ACTION")]
    pub account: Option<AccountAction>,
}

/// Account operations offered by `profile --account`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Create,
    Link,
    Unlink,
}

impl std::fmt::Display for AccountAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Link => write!(f, "link"),
            Self::Unlink => write!(f, "unlink"),
        }
    }
}

// Project command
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ProjectArgs {
    /// Create a new project
    #[arg(long)]
    pub create: bool,

    /// Open the project in the current directory
    #[arg(long)]
    pub open: bool,

    /// Delete an existing project
    #[arg(long)]
    pub delete: bool,
}

// Help command
#[derive(Args, Debug)]
pub struct HelpArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
