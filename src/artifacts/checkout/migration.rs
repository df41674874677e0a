//! Snapshot-to-snapshot working tree migration
//!
//! Given the snapshot the working directory currently reflects and a target
//! snapshot, plans:
//! - `Delete` for every path tracked by the current snapshot only
//! - `Modify` for every path tracked by both (the target content is rewritten)
//! - `Add` for every path tracked by the target only
//!
//! Files tracked by neither snapshot are never touched.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::artifacts::checkout::conflict;
use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Add,
    Delete,
    Modify,
}

/// Planned actions grouped by type; deletions carry no blob
pub type ActionsSet = HashMap<ActionType, Vec<(PathBuf, Option<ObjectId>)>>;

pub struct Migration<'r> {
    database: &'r Database,
    current: &'r Snapshot,
    target: &'r Snapshot,
    actions: ActionsSet,
}

impl<'r> Migration<'r> {
    pub fn new(database: &'r Database, current: &'r Snapshot, target: &'r Snapshot) -> Self {
        let actions = HashMap::from([
            (ActionType::Add, Vec::new()),
            (ActionType::Delete, Vec::new()),
            (ActionType::Modify, Vec::new()),
        ]);

        let mut migration = Self {
            database,
            current,
            target,
            actions,
        };
        migration.plan_changes();

        migration
    }

    fn plan_changes(&mut self) {
        for path in self.current.keys() {
            if !self.target.contains_key(path) {
                self.record(ActionType::Delete, path.clone(), None);
            }
        }

        for (path, oid) in self.target {
            let action = if self.current.contains_key(path) {
                ActionType::Modify
            } else {
                ActionType::Add
            };
            self.record(action, path.clone(), Some(oid.clone()));
        }
    }

    fn record(&mut self, action: ActionType, path: PathBuf, oid: Option<ObjectId>) {
        self.actions.entry(action).or_default().push((path, oid));
    }

    pub fn actions(&self) -> &ActionsSet {
        &self.actions
    }

    pub fn actions_of(&self, action: ActionType) -> &[(PathBuf, Option<ObjectId>)] {
        self.actions
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fail before touching anything if an untracked file is in the way
    pub fn check_conflicts(&self, index: &Index, working_files: &[PathBuf]) -> anyhow::Result<()> {
        conflict::ensure_no_overwrites(
            self.current,
            index,
            working_files,
            self.target.keys().map(PathBuf::as_path),
        )
    }

    pub fn load_blob_data(&self, oid: &ObjectId) -> anyhow::Result<Bytes> {
        Ok(self.database.load_blob(oid)?.into_content())
    }
}
