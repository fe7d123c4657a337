//! Production filesystem adapter backed by `std::fs`.

use std::fs;
use std::io;
use std::path::Path;

use depot_core::FileSystem;

/// [`FileSystem`] implementation that talks to the real filesystem.
///
/// Each method maps 1:1 onto a `std::fs` primitive; no retries, no error
/// translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn copy_file(&self, source: &Path, dest: &Path) -> io::Result<()> {
        fs::copy(source, dest).map(|_| ())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        // symlink_metadata so a link to a directory is not followed.
        fs::symlink_metadata(path).map(|meta| meta.is_dir())
    }
}
