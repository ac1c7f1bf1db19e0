//! Isolated test environment with a temporary home directory.

use super::SbcCommand;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary `HOME`.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Commands created with [`TestEnv::cmd`] see it as their home directory.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path used as `HOME`
    home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            home,
        }
    }

    /// Returns the home directory path.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Returns the path of the default connect.sid file.
    pub fn default_sid_path(&self) -> PathBuf {
        self.home.join(".config").join("sbc").join("connect.sid")
    }

    /// Writes the default connect.sid file, creating its directory.
    pub fn write_default_sid(&self, contents: &str) -> PathBuf {
        let path = self.default_sid_path();
        fs::create_dir_all(path.parent().expect("default path has a parent"))
            .expect("Failed to create config directory");
        fs::write(&path, contents).expect("Failed to write default connect.sid");
        path
    }

    /// Writes `~/.config/sbc/config.toml`.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.home.join(".config").join("sbc").join("config.toml");
        fs::create_dir_all(path.parent().expect("config path has a parent"))
            .expect("Failed to create config directory");
        fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Writes a file relative to the home directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home.join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates an SbcCommand configured for this test environment.
    pub fn cmd(&self) -> SbcCommand {
        SbcCommand::new().home(&self.home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.home().is_dir(), "home should be a directory");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.home().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_default_sid_path() {
        let env = TestEnv::new();
        let path = env.write_default_sid("value");
        assert!(path.ends_with(".config/sbc/connect.sid"));
        assert!(path.starts_with(env.home()));
        assert!(path.is_file());
    }
}
