//! sbc - Scrapbox API client CLI

pub mod auth;
pub mod cli;
pub mod infra;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use auth::{CredentialResolver, SystemHome};
use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_auth, handle_check_output, handle_completions, handle_save},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&SystemHome)?;
    cli::logging::init(cli.verbose, config.log.as_deref());

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        anyhow::bail!("no command given");
    };

    let resolver = CredentialResolver::new(SystemHome);

    match command {
        Command::Auth(args) => {
            handle_auth(args, &cli.credentials, &resolver, config.format(args.format))
        }
        Command::CheckOutput(args) => handle_check_output(args, config.format(args.format)),
        Command::Save(args) => handle_save(args),
        Command::Completions(args) => handle_completions(args),
    }
}
