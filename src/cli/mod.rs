//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// Scrapbox API client CLI
#[derive(Parser, Debug)]
#[command(name = "sbc", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Credential flags shared by every command.
#[derive(Args, Debug, Default, Clone)]
pub struct CredentialArgs {
    /// connect.sid cookie value for private projects
    #[arg(
        long,
        global = true,
        value_name = "SID",
        conflicts_with = "connect_sid_file"
    )]
    pub connect_sid: Option<String>,

    /// File containing the connect.sid cookie value
    #[arg(long, global = true, value_name = "PATH")]
    pub connect_sid_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show which connect.sid would be used and where it came from
    Auth(AuthArgs),

    /// Check whether a path can be used as an output file
    CheckOutput(CheckOutputArgs),

    /// Save piped content to a validated output file
    Save(SaveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `auth` command
#[derive(Parser, Debug)]
pub struct AuthArgs {
    /// Output format (defaults to the config file setting, then human)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `check-output` command
#[derive(Parser, Debug)]
pub struct CheckOutputArgs {
    /// Output file path to check
    pub path: PathBuf,

    /// Output format (defaults to the config file setting, then human)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `save` command
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Input file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
