use crate::areas::repository::Repository;
use crate::artifacts::checkout::conflict::ensure_no_overwrites;
use crate::artifacts::merge::merge_outcome::MergeOutcome;
use crate::artifacts::merge::three_way::{MergeAction, MergePlan, conflict_content};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

impl Repository {
    /// Merge another branch into the current one
    ///
    /// Preconditions are checked before anything is written. Conflicts do not
    /// fail the merge: the commit is created and the conflicted paths come
    /// back in the outcome.
    pub fn merge(&mut self, branch: &str) -> anyhow::Result<MergeOutcome> {
        self.open()?;

        if !self.index().is_empty() {
            return Err(RepositoryError::UncommittedChanges.into());
        }

        let current_branch = self.refs().current_branch()?;
        if current_branch.as_ref() == branch {
            return Err(RepositoryError::CannotMergeSelf.into());
        }
        let target_branch = self.existing_branch(branch)?;

        let (head_oid, head) = self.head_commit()?;
        let target_oid = self
            .refs()
            .read_ref(&target_branch)?
            .ok_or_else(|| RepositoryError::NoSuchBranch {
                name: branch.to_string(),
            })?;

        let base_oid = self
            .find_merge_base(&head_oid, &target_oid)?
            .with_context(|| format!("no common ancestor for {head_oid} and {target_oid}"))?;

        if base_oid == target_oid {
            return Ok(MergeOutcome::AlreadyUpToDate);
        }

        let target = self.database().load_commit(&target_oid)?;

        if base_oid == head_oid {
            self.migrate(head.snapshot(), target.snapshot())?;
            self.refs().update_head(target_oid.clone())?;

            return Ok(MergeOutcome::FastForwarded { commit: target_oid });
        }

        let base = self.database().load_commit(&base_oid)?;

        let working_files = self.workspace().list_files()?;
        let incoming = target
            .snapshot()
            .keys()
            .chain(base.snapshot().keys())
            .map(PathBuf::as_path);
        ensure_no_overwrites(head.snapshot(), &self.index(), &working_files, incoming)?;

        let plan = MergePlan::compute(base.snapshot(), head.snapshot(), target.snapshot());
        if plan.is_empty() {
            return Err(RepositoryError::NothingToCommit.into());
        }

        let conflicted = self.apply_merge_plan(&plan)?;

        let message = format!("Merged {target_branch} into {current_branch}.");
        let commit = self.write_commit(&message, Some(target_oid))?;

        Ok(MergeOutcome::Merged { commit, conflicted })
    }

    /// Write and stage every planned change, returning the conflicted paths
    fn apply_merge_plan(&self, plan: &MergePlan) -> anyhow::Result<Vec<PathBuf>> {
        let mut conflicted = Vec::new();

        for (path, action) in plan.actions() {
            match action {
                MergeAction::TakeTarget(oid) => {
                    let blob = self.database().load_blob(oid)?;
                    self.workspace().write_file(path, blob.content())?;
                    self.index_mut().stage_add(path.clone(), oid.clone());
                }
                MergeAction::Remove => {
                    self.index_mut().stage_remove(path.clone());
                    self.workspace().remove_file(path)?;
                }
                MergeAction::Conflict { head, target } => {
                    let content = conflict_content(
                        &self.side_content(head.as_ref())?,
                        &self.side_content(target.as_ref())?,
                    );
                    let oid = self.store_conflict(path, content)?;
                    self.index_mut().stage_add(path.clone(), oid);
                    conflicted.push(path.clone());
                }
            }
        }

        self.index_mut().write_updates()?;
        Ok(conflicted)
    }

    fn side_content(&self, oid: Option<&ObjectId>) -> anyhow::Result<Bytes> {
        match oid {
            Some(oid) => Ok(self.database().load_blob(oid)?.into_content()),
            None => Ok(Bytes::new()),
        }
    }

    fn store_conflict(&self, path: &Path, content: Bytes) -> anyhow::Result<ObjectId> {
        self.workspace().write_file(path, &content)?;
        self.database().store(&Blob::new(content))
    }
}

