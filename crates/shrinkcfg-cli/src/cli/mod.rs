//! CLI for inspecting shrinker filter and dictionary configuration.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use shrinkcfg_core::config;
use shrinkcfg_core::DictionaryKind;
use std::path::PathBuf;

use commands::{run_check, run_compile, run_names, run_resolve, run_show};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "shrinkcfg")]
#[command(about = "Compile class filters and preview obfuscation dictionaries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Dictionary slot selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    General,
    Class,
    Package,
}

impl From<KindArg> for DictionaryKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::General => DictionaryKind::General,
            KindArg::Class => DictionaryKind::Class,
            KindArg::Package => DictionaryKind::Package,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compile filters as successive calls on one list (no filter = clearing call).
    Compile {
        /// Filter strings, e.g. "com.example.**,!org.test.*".
        filters: Vec<String>,
        /// Print the compiled list as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a filter against class names (first match wins).
    Check {
        /// Filter string.
        filter: String,
        /// Class names in dotted or slash form.
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Load a task file and show every filter option and dictionary slot.
    Show {
        /// Task file (default from config.toml).
        #[arg(long, value_name = "PATH")]
        task: Option<PathBuf>,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resolve a dictionary reference to its URL without reading it.
    Resolve {
        /// Path or URL of the word list.
        reference: String,
        /// Directory relative paths are resolved against (default: current directory).
        #[arg(long, value_name = "DIR")]
        base_dir: Option<PathBuf>,
    },

    /// Print the first names a dictionary slot would supply.
    Names {
        /// Task file (default from config.toml).
        #[arg(long, value_name = "PATH")]
        task: Option<PathBuf>,
        /// Dictionary slot.
        #[arg(long, value_enum, default_value = "general")]
        kind: KindArg,
        /// Number of names (default from config.toml).
        #[arg(short = 'n', long, value_name = "N")]
        count: Option<usize>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Compile { filters, json } => run_compile(&filters, json)?,
            CliCommand::Check { filter, names } => run_check(&filter, &names)?,
            CliCommand::Show { task, json } => {
                let task = task.unwrap_or_else(|| cfg.task_file.clone());
                run_show(&task, json)?;
            }
            CliCommand::Resolve {
                reference,
                base_dir,
            } => {
                let base_dir = match base_dir {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                run_resolve(&reference, &base_dir)?;
            }
            CliCommand::Names { task, kind, count } => {
                let task = task.unwrap_or_else(|| cfg.task_file.clone());
                let count = count.unwrap_or(cfg.preview_names);
                run_names(&task, kind.into(), count)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
