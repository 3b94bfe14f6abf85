//! Project scaffolding
//!
//! Writes the starter files for each [`ProjectType`] and runs the matching
//! setup tools.

use crate::error::{Error, Result};
use crate::process::run_command;
use crate::types::{NewProject, ProjectType};
use aurora_core::utils::is_single_component;
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{json, Value};
use std::fs;
use tracing::info;

/// Marker file identifying a project directory
pub const PACKAGE_JSON: &str = "package.json";

const NPM_INSTALL: &[&str] = &["install"];
const NPM_BUILD: &[&str] = &["run", "build"];
const SWIFT_INIT: &[&str] = &["package", "init", "--type", "executable"];

/// Create the project directory, write starter files and run setup tools.
///
/// Fails with `ProjectExists` before touching the filesystem when the
/// destination is already present. No rollback happens if a setup tool
/// fails afterwards.
pub async fn create_project(project: &NewProject) -> Result<Utf8PathBuf> {
    let path = project.path();

    if path.exists() {
        return Err(Error::project_exists(&project.name, path.as_str()));
    }

    fs::create_dir_all(&path)?;
    info!(
        "Creating {} project \"{}\" in {}",
        project.project_type, project.name, project.directory
    );

    write_starter_files(project.project_type, &project.name, &path)?;

    if project.run_setup {
        for (program, args) in setup_commands(project.project_type) {
            run_command(program, args, &path).await?;
        }
    }

    Ok(path)
}

/// Write the files a project type starts with (none for Swift, which is
/// generated by `swift package init`)
pub fn write_starter_files(project_type: ProjectType, name: &str, path: &Utf8Path) -> Result<()> {
    let greeting = format!("console.log('Hello, {}!');\n", name);

    match project_type {
        ProjectType::Node | ProjectType::JavaScript => {
            write_json(&path.join(PACKAGE_JSON), &node_package_json(name))?;
            fs::write(path.join("index.js"), greeting)?;
        }
        ProjectType::TypeScript => {
            write_json(&path.join(PACKAGE_JSON), &typescript_package_json(name))?;
            fs::create_dir_all(path.join("src"))?;
            fs::write(path.join("src").join("index.ts"), greeting)?;
            write_json(&path.join("tsconfig.json"), &tsconfig())?;
        }
        ProjectType::Swift => {}
    }

    Ok(())
}

/// External commands run after the starter files are written
pub fn setup_commands(project_type: ProjectType) -> Vec<(&'static str, &'static [&'static str])> {
    match project_type {
        ProjectType::Node | ProjectType::JavaScript => vec![("npm", NPM_INSTALL)],
        ProjectType::TypeScript => vec![("npm", NPM_INSTALL), ("npm", NPM_BUILD)],
        ProjectType::Swift => vec![("swift", SWIFT_INIT)],
    }
}

/// Remove `<base>/<name>` and everything below it.
///
/// `name` must be a single directory name; anything else is reported as
/// not found without touching the filesystem.
pub fn delete_project(base: &Utf8Path, name: &str) -> Result<Utf8PathBuf> {
    let path = base.join(name);
    if !is_single_component(name) || !path.is_dir() {
        return Err(Error::project_not_found(name));
    }

    fs::remove_dir_all(&path)?;
    info!("Deleted project at {}", path);
    Ok(path)
}

/// Whether `dir` looks like a project (has a package.json)
pub fn is_project_dir(dir: &Utf8Path) -> bool {
    dir.join(PACKAGE_JSON).is_file()
}

fn node_package_json(name: &str) -> Value {
    json!({
        "name": name,
        "version": "1.0.0",
        "main": "index.js",
        "scripts": {
            "start": "node index.js"
        },
        "dependencies": {}
    })
}

fn typescript_package_json(name: &str) -> Value {
    json!({
        "name": name,
        "version": "1.0.0",
        "main": "dist/index.js",
        "scripts": {
            "build": "tsc",
            "start": "node dist/index.js"
        },
        "dependencies": {},
        "devDependencies": {
            "typescript": "^4.0.0"
        }
    })
}

fn tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "target": "ES6",
            "module": "commonjs",
            "outDir": "dist",
            "rootDir": "src",
            "strict": true
        }
    })
}

fn write_json(path: &Utf8Path, value: &Value) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)? + "\n")?;
    Ok(())
}
