//! Staging area
//!
//! Pending changes for the next commit, kept as two disjoint projections:
//! - `additions`: path → blob id of the content to record
//! - `removals`: paths to drop from the next snapshot
//!
//! Every mutation keeps the projections disjoint by purging the path from the
//! other side. The area is persisted to `.twig/index` and reloaded at the start
//! of each command.

use crate::artifacts::index::index_entry::EntryStream;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.twig/index`)
    path: Box<Path>,
    additions: BTreeMap<PathBuf, ObjectId>,
    removals: BTreeSet<PathBuf>,
    /// Set when the in-memory state differs from the file
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            additions: BTreeMap::new(),
            removals: BTreeSet::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the staging area from disk
    ///
    /// A missing or empty file is an empty staging area.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.additions.clear();
        self.removals.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = EntryStream::new(lock);
        let header = reader.read_header()?;

        for _ in 0..header.additions_count {
            let (path, oid) = reader.read_addition()?;
            self.additions.insert(path, oid);
        }
        for _ in 0..header.removals_count {
            self.removals.insert(reader.read_path()?);
        }

        reader.verify()
    }

    /// Persist the staging area if it changed since it was loaded
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the index file during writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        self.write_file()?;
        self.changed = false;

        Ok(())
    }

    /// Unconditionally write the staging area, creating the file if needed
    pub fn write_file(&self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = EntryStream::new(lock);
        writer.write_header(&IndexHeader::with_counts(
            self.additions.len() as u32,
            self.removals.len() as u32,
        ))?;

        for (path, oid) in &self.additions {
            writer.write_addition(path, oid)?;
        }
        for path in &self.removals {
            writer.write_path(path)?;
        }

        writer.finish()
    }

    /// Record `path` for addition, overwriting a previous addition and
    /// cancelling a pending removal
    pub fn stage_add(&mut self, path: PathBuf, oid: ObjectId) {
        self.removals.remove(&path);
        self.additions.insert(path, oid);
        self.changed = true;
    }

    /// Record `path` for removal, purging any staged addition
    pub fn stage_remove(&mut self, path: PathBuf) {
        self.additions.remove(&path);
        self.removals.insert(path);
        self.changed = true;
    }

    /// Drop a staged addition, leaving removals untouched
    pub fn cancel_add(&mut self, path: &Path) -> bool {
        let removed = self.additions.remove(path).is_some();
        self.changed |= removed;
        removed
    }

    /// Drop a staged removal, leaving additions untouched
    pub fn cancel_remove(&mut self, path: &Path) -> bool {
        let removed = self.removals.remove(path);
        self.changed |= removed;
        removed
    }

    pub fn is_staged_for_addition(&self, path: &Path) -> bool {
        self.additions.contains_key(path)
    }

    pub fn is_staged_for_removal(&self, path: &Path) -> bool {
        self.removals.contains(path)
    }

    /// Total number of pending operations
    pub fn size(&self) -> usize {
        self.additions.len() + self.removals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn clear(&mut self) {
        self.changed |= !self.is_empty();
        self.additions.clear();
        self.removals.clear();
    }

    pub fn additions(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeSet<PathBuf> {
        &self.removals
    }
}
