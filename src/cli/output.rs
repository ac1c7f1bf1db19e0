//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::auth::ResolvedCredential;
use crate::infra::ValidationOutcome;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Result of the `auth` command. The token is always masked.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CredentialReport {
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl CredentialReport {
    pub fn from_resolution(found: Option<&ResolvedCredential>) -> Self {
        match found {
            Some(credential) => Self {
                present: true,
                source: Some(credential.source.kind()),
                path: credential
                    .source
                    .path()
                    .map(|p| p.display().to_string()),
                token: Some(credential.sid.masked()),
            },
            None => Self {
                present: false,
                source: None,
                path: None,
                token: None,
            },
        }
    }
}

/// Result of the `check-output` command.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PathCheckReport {
    pub path: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl PathCheckReport {
    pub fn new(path: &std::path::Path, outcome: &ValidationOutcome) -> Self {
        let reason = match outcome {
            ValidationOutcome::Accepted(_) => None,
            ValidationOutcome::Rejected(reason) => Some(reason.as_str()),
        };
        Self {
            path: path.display().to_string(),
            accepted: outcome.is_accepted(),
            reason,
        }
    }
}
