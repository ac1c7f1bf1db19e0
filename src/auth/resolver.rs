//! Credential resolution with priority fallback.
//!
//! Sources are consulted in order, first match wins:
//! 1. `--connect-sid` value (non-empty)
//! 2. `--connect-sid-file` contents (must exist)
//! 3. `~/.config/sbc/connect.sid` contents (skipped when missing)
//!
//! File contents are trimmed of surrounding whitespace. An empty result after
//! trimming is still a token.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use super::connect_sid::ConnectSid;
use super::home::{HomeDir, SystemHome};

/// Location of the default credential file, relative to the home directory.
pub const DEFAULT_CONNECT_SID_PATH: &str = ".config/sbc/connect.sid";

/// Errors raised while resolving a credential.
///
/// Only an explicitly requested file can fail; a missing or unreadable default
/// file just ends the fallback chain.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("connect.sid file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read connect.sid file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CredentialError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => CredentialError::FileNotFound { path: path.into() },
            _ => CredentialError::Read {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Where a resolved credential came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    ExplicitValue,
    ExplicitFile(PathBuf),
    DefaultFile(PathBuf),
}

impl CredentialSource {
    /// The file the token was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            CredentialSource::ExplicitValue => None,
            CredentialSource::ExplicitFile(path) | CredentialSource::DefaultFile(path) => {
                Some(path)
            }
        }
    }

    /// Short machine-friendly label.
    pub fn kind(&self) -> &'static str {
        match self {
            CredentialSource::ExplicitValue => "argument",
            CredentialSource::ExplicitFile(_) => "file",
            CredentialSource::DefaultFile(_) => "default-file",
        }
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::ExplicitValue => write!(f, "--connect-sid"),
            CredentialSource::ExplicitFile(path) => {
                write!(f, "--connect-sid-file {}", path.display())
            }
            CredentialSource::DefaultFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A token together with the source it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredential {
    pub sid: ConnectSid,
    pub source: CredentialSource,
}

impl ResolvedCredential {
    fn new(sid: ConnectSid, source: CredentialSource) -> Self {
        Self { sid, source }
    }

    pub fn into_sid(self) -> ConnectSid {
        self.sid
    }
}

type Resolution = Result<Option<ResolvedCredential>, CredentialError>;

/// One tier of the fallback chain, evaluated only when reached.
type Candidate<'a> = Box<dyn FnOnce() -> Resolution + 'a>;

/// Resolves the `connect.sid` token from ranked sources.
#[derive(Debug, Clone, Default)]
pub struct CredentialResolver<H = SystemHome> {
    home: H,
}

impl<H: HomeDir> CredentialResolver<H> {
    pub fn new(home: H) -> Self {
        Self { home }
    }

    /// Returns the default credential file path, or `None` when no home
    /// directory can be determined.
    pub fn default_path(&self) -> Option<PathBuf> {
        self.home
            .home_dir()
            .map(|home| home.join(DEFAULT_CONNECT_SID_PATH))
    }

    /// Resolves a credential from the given explicit inputs and the default
    /// file.
    ///
    /// Returns `Ok(None)` when no source yields a token.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::FileNotFound` if `explicit_file` is given and
    /// does not exist, regardless of the default file.
    /// Returns `CredentialError::Read` if `explicit_file` exists but cannot be
    /// read as UTF-8 text.
    pub fn resolve(&self, explicit_value: Option<&str>, explicit_file: Option<&Path>) -> Resolution {
        let candidates: [Candidate<'_>; 3] = [
            Box::new(move || Ok(from_value(explicit_value))),
            Box::new(move || from_explicit_file(explicit_file)),
            Box::new(|| Ok(self.from_default_file())),
        ];

        for candidate in candidates {
            if let Some(found) = candidate()? {
                debug!(source = found.source.kind(), "resolved connect.sid");
                return Ok(Some(found));
            }
        }

        debug!("no connect.sid source available");
        Ok(None)
    }

    fn from_default_file(&self) -> Option<ResolvedCredential> {
        let Some(path) = self.default_path() else {
            debug!("home directory unknown, skipping default connect.sid file");
            return None;
        };

        match read_token(&path) {
            Ok(sid) => Some(ResolvedCredential::new(
                sid,
                CredentialSource::DefaultFile(path),
            )),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "default connect.sid file not present");
                None
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable default connect.sid file");
                None
            }
        }
    }
}

/// Resolves a credential using the current user's home directory.
///
/// # Errors
///
/// See [`CredentialResolver::resolve`].
pub fn resolve_credential(
    explicit_value: Option<&str>,
    explicit_file: Option<&Path>,
) -> Result<Option<ConnectSid>, CredentialError> {
    CredentialResolver::new(SystemHome)
        .resolve(explicit_value, explicit_file)
        .map(|found| found.map(ResolvedCredential::into_sid))
}

fn from_value(value: Option<&str>) -> Option<ResolvedCredential> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| ResolvedCredential::new(ConnectSid::new(v), CredentialSource::ExplicitValue))
}

fn from_explicit_file(path: Option<&Path>) -> Resolution {
    let Some(path) = path else {
        return Ok(None);
    };
    let sid = read_token(path).map_err(|e| CredentialError::from_io(path, e))?;
    Ok(Some(ResolvedCredential::new(
        sid,
        CredentialSource::ExplicitFile(path.to_path_buf()),
    )))
}

fn read_token(path: &Path) -> io::Result<ConnectSid> {
    let contents = std::fs::read_to_string(path)?;
    Ok(ConnectSid::new(contents.trim()))
}
