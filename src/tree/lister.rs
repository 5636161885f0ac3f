//! Content lister: the immediate entries of one folder, filtered and ordered

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Result, TreeError};
use crate::stats::Counters;

use super::config::RenderConfig;
use super::utils::compare_names;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    // Declaration order is the listing order: folders before files
    Directory,
    File,
}

/// One entry of a folder listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: OsString,
    pub parent: PathBuf,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

/// Lists folder contents according to a configuration.
pub struct ContentLister<'a> {
    config: &'a RenderConfig,
}

impl<'a> ContentLister<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Read the entries of `folder`, drop ignored ones and order the rest.
    ///
    /// Every entry removed by the ignore list bumps `counters.ignored` once.
    /// Entries that are neither a regular file nor a folder (symlinks, sockets,
    /// fifos) are skipped without being counted.
    pub fn list(&self, folder: &Path, counters: &mut Counters) -> Result<Vec<DirectoryEntry>> {
        debug!("listing {}", folder.display());
        let read = fs::read_dir(folder).map_err(|e| TreeError::access(folder, e))?;

        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| TreeError::access(folder, e))?;
            let path = entry.path();

            if self.config.is_ignored(&path) {
                debug!("ignoring {}", path.display());
                counters.record_ignored();
                continue;
            }

            let file_type = entry.file_type().map_err(|e| TreeError::access(&path, e))?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                warn!("skipping {}: not a regular file or folder", path.display());
                continue;
            };

            entries.push(DirectoryEntry {
                name: entry.file_name(),
                parent: folder.to_path_buf(),
                kind,
            });
        }

        if !self.config.unsorted {
            sort_entries(&mut entries);
        }
        Ok(entries)
    }
}

/// Folders first, then files; each group by name.
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| {
                compare_names(&a.name.to_string_lossy(), &b.name.to_string_lossy())
            })
    });
}
