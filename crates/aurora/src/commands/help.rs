//! Help command, with an optional machine-readable form

use anyhow::Result;
use clap::{Arg, Command, CommandFactory};
use serde::Serialize;

use crate::cli::{Cli, HelpArgs};

/// Structured description of the CLI
#[derive(Debug, Serialize)]
pub struct HelpDoc {
    pub name: String,
    pub description: String,
    pub version: String,
    pub commands: Vec<CommandHelp>,
    pub options: Vec<OptionHelp>,
}

#[derive(Debug, Serialize)]
pub struct CommandHelp {
    pub name: String,
    pub description: String,
    pub options: Vec<OptionHelp>,
}

#[derive(Debug, Serialize)]
pub struct OptionHelp {
    pub flags: String,
    pub description: String,
}

pub fn run(args: HelpArgs) -> Result<()> {
    let mut cmd = Cli::command();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&structured_help(&cmd))?);
    } else {
        cmd.print_help()?;
        println!();
    }
    Ok(())
}

/// Describe a clap command tree
pub fn structured_help(cmd: &Command) -> HelpDoc {
    HelpDoc {
        name: cmd.get_name().to_string(),
        description: cmd.get_about().map(|s| s.to_string()).unwrap_or_default(),
        version: cmd.get_version().unwrap_or_default().to_string(),
        commands: cmd
            .get_subcommands()
            .map(|sub| CommandHelp {
                name: sub.get_name().to_string(),
                description: sub.get_about().map(|s| s.to_string()).unwrap_or_default(),
                options: options(sub),
            })
            .collect(),
        options: options(cmd),
    }
}

fn options(cmd: &Command) -> Vec<OptionHelp> {
    cmd.get_arguments()
        .filter(|arg| !arg.is_hide_set())
        .filter_map(|arg| {
            Some(OptionHelp {
                flags: flags(arg)?,
                description: arg.get_help().map(|s| s.to_string()).unwrap_or_default(),
            })
        })
        .collect()
}

/// Flag spelling such as `-v, --verbose` or `--update <ID>`
fn flags(arg: &Arg) -> Option<String> {
    let mut names = Vec::new();
    if let Some(short) = arg.get_short() {
        names.push(format!("-{}", short));
    }
    if let Some(long) = arg.get_long() {
        names.push(format!("--{}", long));
    }
    if names.is_empty() {
        return None;
    }

    let mut flags = names.join(", ");
    if arg.get_action().takes_values() {
        let value = arg
            .get_value_names()
            .and_then(|names| names.first())
            .map(|name| name.as_str().to_string())
            .unwrap_or_else(|| arg.get_id().as_str().to_uppercase());
        flags.push_str(&format!(" <{}>", value));
    }
    Some(flags)
}
