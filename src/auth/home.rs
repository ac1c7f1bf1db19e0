//! Home directory lookup behind a trait so tests can substitute a temp dir.

use std::path::{Path, PathBuf};

/// Supplies the invoking user's home directory.
pub trait HomeDir {
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Home directory of the current user, as reported by the platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHome;

impl HomeDir for SystemHome {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// A fixed home directory.
#[derive(Debug, Clone)]
pub struct FixedHome(PathBuf);

impl FixedHome {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl HomeDir for FixedHome {
    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

impl<H: HomeDir + ?Sized> HomeDir for &H {
    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}
