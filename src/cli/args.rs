//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! `--passive-browsers-*` option arguments are not declared here; they are
//! split off before parsing and read by the configuration loader.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::plugin::Role;

/// Passive browsers - disable tests in passive browsers unless they opt in.
#[derive(Debug, Parser)]
#[command(name = "passive-browsers")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML options file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List which of the given browsers are passive
    Resolve(ResolveArgs),

    /// Resolve a test tree and show which tests are disabled
    Plan(PlanArgs),

    /// Show the resolved configuration
    Config(ConfigArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResolveArgs {
    /// Known browser ids (repeatable or comma-separated)
    #[arg(short, long = "browser", value_delimiter = ',', required = true)]
    pub browsers: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PlanArgs {
    /// YAML file describing suites, tests and their directives
    pub tree: PathBuf,

    /// Role of this process
    #[arg(long, value_enum, default_value_t = RoleArg::Coordinator)]
    pub role: RoleArg,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Process role as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Coordinator,
    Subordinate,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Coordinator => Role::Coordinator,
            RoleArg::Subordinate => Role::Subordinate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_with_repeated_and_delimited_browsers() {
        let cli = Cli::parse_from([
            "passive-browsers",
            "resolve",
            "--browser",
            "a,b",
            "-b",
            "c",
        ]);
        match cli.command {
            Commands::Resolve(args) => assert_eq!(args.browsers, vec!["a", "b", "c"]),
            other => panic!("Expected Resolve, got {:?}", other),
        }
    }

    #[test]
    fn resolve_requires_browsers() {
        assert!(Cli::try_parse_from(["passive-browsers", "resolve"]).is_err());
    }

    #[test]
    fn plan_defaults_to_coordinator() {
        let cli = Cli::parse_from(["passive-browsers", "plan", "tree.yml"]);
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.role, RoleArg::Coordinator);
                assert_eq!(args.tree, PathBuf::from("tree.yml"));
            }
            other => panic!("Expected Plan, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from([
            "passive-browsers",
            "config",
            "--json",
            "--config",
            "opts.yml",
            "--debug",
        ]);
        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("opts.yml")));
    }

    #[test]
    fn role_arg_converts() {
        assert_eq!(Role::from(RoleArg::Subordinate), Role::Subordinate);
    }
}
