//! CLI command handling module
//!
//! Argument definitions and the dispatch from subcommand to handler.

mod config;
mod inspect;
mod list;
mod logging;
mod version;

pub use config::{ConfigSubcommand, handle_config_command};
pub use inspect::{InspectArgs, InspectPlan, collect_with_deadline, run_inspect};
pub use list::{ListArgs, run_list};
pub use logging::*;
pub use version::display_version;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::SettingsLoader;

/// Render Fluid datasets and their dependent resources as a graph
#[derive(Parser, Debug)]
#[command(name = "kubectl-graph", version)]
#[command(about = "Render Fluid datasets and their dependent resources as a graph", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a resource and the resources it depends on
    Inspect(InspectArgs),
    /// List a deployment's rollout state
    List(ListArgs),
    /// Settings management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Show version information
    Version,
}

/// Run the selected subcommand
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Inspect(args) => {
            args.check_usage()?;
            let settings = SettingsLoader::load().context("failed to load settings")?;
            run_inspect(args, &settings).await
        }
        Command::List(args) => {
            let settings = SettingsLoader::load().context("failed to load settings")?;
            run_list(args, &settings).await
        }
        Command::Config { subcommand } => handle_config_command(subcommand),
        Command::Version => {
            display_version();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::try_parse_from([
            "kubectl-graph",
            "inspect",
            "dataset",
            "mydata",
            "-n",
            "ml",
            "-o",
            "json",
            "-d",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Command::Inspect(args) => {
                assert_eq!(args.resource_type, "dataset");
                assert_eq!(args.name, "mydata");
                assert_eq!(args.namespace.as_deref(), Some("ml"));
                assert_eq!(args.output.as_deref(), Some("json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["kubectl-graph", "list", "web", "--namespace", "prod"])
            .unwrap();
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.deployment, "web");
                assert_eq!(args.namespace.as_deref(), Some("prod"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_inspect_requires_name() {
        assert!(Cli::try_parse_from(["kubectl-graph", "inspect", "dataset"]).is_err());
    }
}
