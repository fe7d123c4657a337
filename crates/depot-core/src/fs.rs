//! Filesystem capability boundary.

use std::io;
use std::path::Path;

/// The filesystem operations the engine depends on.
///
/// All operations are synchronous and blocking; each call completes before
/// the next begins. Errors stay opaque to the engine: they are recorded as
/// batch outcomes, never matched on by kind.
pub trait FileSystem {
    /// List the entry names of a directory, in no particular order.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory, including any missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy a single file.
    fn copy_file(&self, source: &Path, dest: &Path) -> io::Result<()>;

    /// Rename (move) a path.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory and everything beneath it.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Whether a path refers to a directory.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        (**self).read_dir(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn copy_file(&self, source: &Path, dest: &Path) -> io::Result<()> {
        (**self).copy_file(source, dest)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir_all(path)
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        (**self).is_dir(path)
    }
}
