//! The selection-and-bulk-operation engine.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use depot_core::{DepotError, EntryFailure, FileSystem, NameGenerator, SelectionSpec};

/// Random candidates tried before falling back to numeric suffixes.
const MAX_NAME_ATTEMPTS: usize = 10;

/// Owns one managed directory and the current selection over it.
///
/// Bulk operations are best-effort batches: per-entry failures are caught
/// and aggregated, and the selection narrows to exactly the entries that
/// failed. Callers retry by invoking the same operation again.
///
/// Not synchronized: callers sharing one manager across threads must wrap
/// it in a lock, since the selection is plain mutable state.
#[derive(Debug)]
pub struct FileManager<F, G> {
    root: PathBuf,
    fs: F,
    names: G,
    selection: Vec<String>,
}

impl<F: FileSystem, G: NameGenerator> FileManager<F, G> {
    /// Create a manager over an existing directory.
    ///
    /// Fails if the directory does not exist per the capability; no side
    /// effects are performed in that case.
    pub fn new(root: impl Into<PathBuf>, fs: F, names: G) -> Result<Self, DepotError> {
        let root = root.into();
        if !fs.exists(&root) {
            return Err(DepotError::directory_not_found(root));
        }
        Ok(Self {
            root,
            fs,
            names,
            selection: Vec::new(),
        })
    }

    /// The managed directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The currently selected entry names, in order.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// List the entries of the managed directory.
    ///
    /// Order is whatever the capability reports.
    pub fn list_entries(&self) -> Result<Vec<String>, DepotError> {
        self.fs
            .read_dir(&self.root)
            .map_err(|e| DepotError::io(&self.root, e))
    }

    /// Replace the selection.
    ///
    /// `"all"` snapshots the current listing at call time; an explicit list
    /// is stored verbatim, without checking that the named entries exist.
    /// Unknown names surface later as per-entry operation failures.
    pub fn select_entries(&mut self, spec: SelectionSpec) -> Result<(), DepotError> {
        self.selection = match spec {
            SelectionSpec::All(_) => self.list_entries()?,
            SelectionSpec::Entries(names) => names,
        };
        debug!(count = self.selection.len(), "selection replaced");
        Ok(())
    }

    /// Copy the selected entries into a subdirectory of the managed root.
    ///
    /// With no destination (or an empty one), a collision-free name is
    /// generated. Returns the per-entry failures; an empty list means full
    /// success.
    pub fn copy(&mut self, destination: Option<&str>) -> Result<Vec<EntryFailure>, DepotError> {
        self.transfer(destination, "copy", |fs, source, target| {
            fs.copy_file(source, target)
        })
    }

    /// Move the selected entries into a subdirectory of the managed root.
    ///
    /// Same contract as [`FileManager::copy`], using rename per entry.
    pub fn move_entries(
        &mut self,
        destination: Option<&str>,
    ) -> Result<Vec<EntryFailure>, DepotError> {
        self.transfer(destination, "move", |fs, source, target| {
            fs.rename(source, target)
        })
    }

    /// Delete the selected entries.
    ///
    /// The kind is queried per entry at delete time: directories are removed
    /// recursively, plain files unlinked. A stat failure counts as that
    /// entry's failure rather than aborting the batch.
    pub fn delete(&mut self) -> Vec<EntryFailure> {
        let mut failures = Vec::new();
        let mut remaining = Vec::new();

        for entry in std::mem::take(&mut self.selection) {
            let path = self.root.join(&entry);
            let result = self.fs.is_dir(&path).and_then(|is_dir| {
                if is_dir {
                    self.fs.remove_dir_all(&path)
                } else {
                    self.fs.remove_file(&path)
                }
            });
            if let Err(err) = result {
                warn!(entry = %entry, error = %err, "delete failed");
                failures.push(EntryFailure::new(entry.as_str(), &err));
                remaining.push(entry);
            }
        }

        self.selection = remaining;
        debug!(failed = failures.len(), "delete batch finished");
        failures
    }

    /// Shared copy/move algorithm: resolve the destination, ensure it
    /// exists, then apply `op` per selected entry in order, never aborting
    /// on individual failures.
    fn transfer(
        &mut self,
        destination: Option<&str>,
        op_name: &str,
        op: impl Fn(&F, &Path, &Path) -> io::Result<()>,
    ) -> Result<Vec<EntryFailure>, DepotError> {
        let dest_name = match destination {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.find_unique_directory_name(),
        };
        let dest_path = self.root.join(&dest_name);
        if !self.fs.exists(&dest_path) {
            self.fs
                .create_dir_all(&dest_path)
                .map_err(|e| DepotError::io(&dest_path, e))?;
        }

        let mut failures = Vec::new();
        let mut remaining = Vec::new();

        for entry in std::mem::take(&mut self.selection) {
            let source = self.root.join(&entry);
            let target = dest_path.join(&entry);
            match op(&self.fs, &source, &target) {
                Ok(()) => {}
                Err(err) => {
                    warn!(op = op_name, entry = %entry, error = %err, "entry failed");
                    failures.push(EntryFailure::new(entry.as_str(), &err));
                    remaining.push(entry);
                }
            }
        }

        self.selection = remaining;
        debug!(
            op = op_name,
            destination = %dest_name,
            failed = failures.len(),
            "batch finished"
        );
        Ok(failures)
    }

    /// Find a destination name that does not collide with an existing entry.
    ///
    /// Phase 1 draws random candidates, up to [`MAX_NAME_ATTEMPTS`] generator
    /// calls. Phase 2, reached only if the last candidate still collides,
    /// suffixes `-1`, `-2`, ... until a free path is found. The resolver
    /// checks existence only; creating the directory is the caller's job.
    fn find_unique_directory_name(&self) -> String {
        let mut name = self.names.generate();
        let mut attempts = 1;
        while self.fs.exists(&self.root.join(&name)) && attempts < MAX_NAME_ATTEMPTS {
            name = self.names.generate();
            attempts += 1;
        }

        if self.fs.exists(&self.root.join(&name)) {
            let mut suffix = 1;
            loop {
                let numbered = format!("{name}-{suffix}");
                if !self.fs.exists(&self.root.join(&numbered)) {
                    return numbered;
                }
                suffix += 1;
            }
        }

        name
    }
}
