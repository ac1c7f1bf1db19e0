//! Auth command handler.

use anyhow::Result;

use super::{print_json, resolve_credential};
use crate::auth::{CredentialResolver, HomeDir};
use crate::cli::output::{CredentialReport, OutputFormat};
use crate::cli::{AuthArgs, CredentialArgs};

pub fn handle_auth<H: HomeDir>(
    _args: &AuthArgs,
    credentials: &CredentialArgs,
    resolver: &CredentialResolver<H>,
    format: OutputFormat,
) -> Result<()> {
    let found = resolve_credential(credentials, resolver)?;
    let report = CredentialReport::from_resolution(found.as_ref());

    match format {
        OutputFormat::Json => print_json(report)?,
        OutputFormat::Human => match found {
            Some(credential) => {
                println!("connect.sid: {}", credential.sid);
                println!("Source: {}", credential.source);
            }
            None => {
                println!("No connect.sid configured (anonymous access)");
                if let Some(path) = resolver.default_path() {
                    println!("Default file: {}", path.display());
                }
            }
        },
    }
    Ok(())
}
