//! Command handlers for the CLI.

mod auth;
mod check_output;
mod completions;
mod save;


use anyhow::{Context, Result};

use crate::auth::{CredentialResolver, HomeDir, ResolvedCredential};
use crate::cli::CredentialArgs;

// Re-export public items
pub use auth::handle_auth;
pub use check_output::handle_check_output;
pub use completions::handle_completions;
pub use save::handle_save;

// Re-export for tests
#[cfg(test)]
pub(crate) use save::handle_save_impl;

// ===========================================
// Shared Utilities
// ===========================================

/// Resolves the credential selected by the global flags.
///
/// Commands that talk to private projects pass the result to the API client;
/// `None` means anonymous access.
pub fn resolve_credential<H: HomeDir>(
    args: &CredentialArgs,
    resolver: &CredentialResolver<H>,
) -> Result<Option<ResolvedCredential>> {
    resolver
        .resolve(args.connect_sid.as_deref(), args.connect_sid_file.as_deref())
        .context("failed to resolve connect.sid")
}

/// Prints `value` as pretty JSON wrapped in an `Output` envelope.
pub(crate) fn print_json<T: serde::Serialize>(value: T) -> Result<()> {
    let json = serde_json::to_string_pretty(&crate::cli::output::Output::new(value))?;
    println!("{}", json);
    Ok(())
}
