use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan",
    version,
    about = "protex CLI - Cross-field checks for protein expression target registration.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S validation.distinctness=always
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the copy and residue number bounds of a target's subunits.
    Ranges(RangesArgs),
    /// Validate a batch of PTMs, interactions and copy selections against a target.
    Check(CheckArgs),
    /// Screen a FASTA file of genes before adding them to a subunit.
    Genes(GenesArgs),
    /// Filter a target inventory by a comma-separated list of target names.
    Search(SearchArgs),
}

/// Arguments for the `ranges` subcommand.
#[derive(Args, Debug)]
pub struct RangesArgs {
    /// Path to the target description file (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub target: PathBuf,

    /// Only show the bounds of this subunit.
    #[arg(short, long, value_name = "NAME")]
    pub subunit: Option<String>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the target description file (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub target: PathBuf,

    /// Path to the registration batch file (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub batch: PathBuf,

    /// Override the report format from the config file.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Override when identical PTM endpoints are reported
    /// ('after-residue-check' or 'always').
    #[arg(long, value_name = "POLICY")]
    pub distinctness: Option<String>,
}

/// Arguments for the `genes` subcommand.
#[derive(Args, Debug)]
pub struct GenesArgs {
    /// Path to the target description file (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub target: PathBuf,

    /// Name of the subunit receiving the genes.
    #[arg(short, long, required = true, value_name = "NAME")]
    pub subunit: String,

    /// FASTA file with the genes to upload.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub fasta: PathBuf,

    /// Write the accepted genes to this FASTA file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Path to the target inventory file (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub inventory: PathBuf,

    /// Comma-separated target names; matching ignores case and whitespace.
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::parse_from([
            "protex",
            "check",
            "-t",
            "target.toml",
            "-b",
            "batch.toml",
            "-vv",
            "-S",
            "output.format=json",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.set_values, vec!["output.format=json".to_string()]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.batch, PathBuf::from("batch.toml"));
                assert!(args.format.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn search_query_is_positional() {
        let cli = Cli::parse_from(["protex", "search", "-i", "inv.toml", "p53, MDM2"]);
        match cli.command {
            Commands::Search(args) => assert_eq!(args.query, "p53, MDM2"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["protex", "-q", "-v", "ranges", "-t", "t.toml"]);
        assert!(result.is_err());
    }
}
