//! Filesystem abstraction used by the page generator

use std::fs;
use std::io;
use std::path::Path;

/// Filesystem operations needed to write a page
///
/// The generator only ever checks paths, creates the page folder and writes
/// whole files. Keeping these behind a trait lets tests observe or fail
/// individual calls.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Whether `path` exists
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory; the parent must already exist
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Write `contents` to `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Local disk filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
