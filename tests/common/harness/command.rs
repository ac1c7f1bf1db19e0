//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `sbc` binary.
///
/// The child process gets its own `HOME`; the test process environment is
/// left alone.
pub struct SbcCommand {
    args: Vec<String>,
    home: Option<PathBuf>,
    stdin: Option<Vec<u8>>,
}

impl SbcCommand {
    /// Creates a new command for the `sbc` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            home: None,
            stdin: None,
        }
    }

    /// Sets `HOME` for the child process.
    pub fn home(mut self, path: &Path) -> Self {
        self.home = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds bytes to the child's standard input.
    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("sbc").expect("Failed to find sbc binary");
        cmd.args(&self.args).env_remove("RUST_LOG");
        if let Some(home) = &self.home {
            cmd.env("HOME", home);
        }
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Credential Options
    // ===========================================

    /// Adds `--connect-sid <value>`.
    pub fn connect_sid(self, value: &str) -> Self {
        self.args(["--connect-sid", value])
    }

    /// Adds `--connect-sid-file <path>`.
    pub fn connect_sid_file(self, path: &Path) -> Self {
        let path = path.to_string_lossy().to_string();
        self.args(["--connect-sid-file".to_string(), path])
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `auth` command.
    pub fn auth(self) -> Self {
        self.args(["auth"])
    }

    /// Configures for the `check-output` command with a path.
    pub fn check_output(self, path: &Path) -> Self {
        let path = path.to_string_lossy().to_string();
        self.args(["check-output".to_string(), path])
    }

    /// Configures for the `save` command writing to `output`.
    pub fn save(self, output: &Path) -> Self {
        let output = output.to_string_lossy().to_string();
        self.args(["save".to_string(), "--output".to_string(), output])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for SbcCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        SbcCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = SbcCommand::new().connect_sid("abc").auth().format_json();
        assert_eq!(
            cmd.get_args(),
            &["--connect-sid", "abc", "auth", "--format", "json"]
        );
    }
}
