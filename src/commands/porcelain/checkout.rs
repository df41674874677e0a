use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::path::Path;

impl Repository {
    /// Switch to another branch, replacing the tracked working files with its
    /// snapshot and clearing the staging area
    pub fn checkout_branch(&mut self, branch: &str) -> anyhow::Result<()> {
        self.open()?;

        let branch_name = self.existing_branch(branch)?;
        if self.refs().is_current_branch(&branch_name)? {
            return Err(RepositoryError::AlreadyOnBranch.into());
        }

        let (_, head) = self.head_commit()?;
        let target_oid = self
            .refs()
            .read_ref(&branch_name)?
            .ok_or_else(|| RepositoryError::NoSuchBranch {
                name: branch.to_string(),
            })?;
        let target = self.database().load_commit(&target_oid)?;

        self.migrate(head.snapshot(), target.snapshot())?;

        let mut index = self.index_mut();
        index.clear();
        index.write_updates()?;

        self.refs().set_head(&branch_name)
    }

    /// Overwrite a working file with HEAD's version
    pub fn restore_file(&mut self, path: &Path) -> anyhow::Result<()> {
        self.open()?;

        let head_oid = self.refs().read_head()?;
        self.restore_from(&head_oid, path)
    }

    /// Overwrite a working file with its version in the given commit
    pub fn restore_file_from_commit(&mut self, commit_id: &str, path: &Path) -> anyhow::Result<()> {
        self.open()?;

        let commit_oid = Revision::try_parse(commit_id)?.resolve_commit(self.database())?;
        self.restore_from(&commit_oid, path)
    }

    fn restore_from(&self, commit_oid: &ObjectId, path: &Path) -> anyhow::Result<()> {
        let path = self.relative_path(path)?;
        let commit = self.database().load_commit(commit_oid)?;

        let blob_id = commit
            .blob_id(&path)
            .ok_or_else(|| RepositoryError::FileNotInCommit { path: path.clone() })?;
        let blob = self.database().load_blob(blob_id)?;

        self.workspace().write_file(&path, blob.content())?;

        let mut index = self.index_mut();
        index.cancel_add(&path);
        index.write_updates()
    }
}
