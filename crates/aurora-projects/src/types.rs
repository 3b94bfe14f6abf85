//! Core types for project management

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Kinds of project the CLI can scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    /// Node.js application
    Node,
    /// Swift package (executable)
    Swift,
    /// TypeScript application compiled with tsc
    TypeScript,
    /// Plain JavaScript application
    JavaScript,
}

impl ProjectType {
    /// Get all available project types, in prompt order
    pub fn all() -> Vec<Self> {
        vec![Self::Node, Self::Swift, Self::TypeScript, Self::JavaScript]
    }

    /// Get the display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::Swift => "Swift",
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
        }
    }

    /// Get aliases for this project type
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Node => vec!["nodejs", "node.js"],
            Self::Swift => vec!["spm"],
            Self::TypeScript => vec!["ts"],
            Self::JavaScript => vec!["js"],
        }
    }

    /// Parse from string, checking aliases
    pub fn from_str_with_aliases(s: &str) -> Option<Self> {
        let s_lower = s.to_lowercase();

        Self::all().into_iter().find(|project_type| {
            project_type.as_str().to_lowercase() == s_lower
                || project_type.aliases().contains(&s_lower.as_str())
        })
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_aliases(s).ok_or_else(|| {
            format!(
                "Unknown project type: {}. Valid types: {}",
                s,
                Self::all()
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

/// Request to scaffold a new project
#[derive(Debug, Clone)]
pub struct NewProject {
    /// Project (and directory) name
    pub name: String,
    pub project_type: ProjectType,
    /// Parent directory the project is created in
    pub directory: Utf8PathBuf,
    /// Run `npm install` / `swift package init` and friends after writing files
    pub run_setup: bool,
}

impl NewProject {
    pub fn new(name: impl Into<String>, project_type: ProjectType, directory: Utf8PathBuf) -> Self {
        Self {
            name: name.into(),
            project_type,
            directory,
            run_setup: true,
        }
    }

    /// Directory the project will live in
    pub fn path(&self) -> Utf8PathBuf {
        self.directory.join(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_from_str() {
        assert_eq!("node".parse::<ProjectType>().unwrap(), ProjectType::Node);
        assert_eq!("Swift".parse::<ProjectType>().unwrap(), ProjectType::Swift);
        assert_eq!("ts".parse::<ProjectType>().unwrap(), ProjectType::TypeScript);
        assert_eq!(
            "JavaScript".parse::<ProjectType>().unwrap(),
            ProjectType::JavaScript
        );
        assert!("cobol".parse::<ProjectType>().is_err());
    }

    #[test]
    fn test_project_type_all() {
        let all = ProjectType::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], ProjectType::Node);
    }

    #[test]
    fn test_new_project_path() {
        let project = NewProject::new("demo", ProjectType::Node, Utf8PathBuf::from("/work"));
        assert_eq!(project.path(), Utf8PathBuf::from("/work/demo"));
        assert!(project.run_setup);
    }
}
