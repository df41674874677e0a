use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;

impl Repository {
    /// Record the staging area on top of HEAD, advance the current branch and
    /// clear the staging area
    ///
    /// Expects the staging area to be loaded already.
    pub(crate) fn write_commit(
        &mut self,
        message: &str,
        merge_parent: Option<ObjectId>,
    ) -> anyhow::Result<ObjectId> {
        if message.trim().is_empty() {
            return Err(RepositoryError::EmptyCommitMessage.into());
        }
        if self.index().is_empty() {
            return Err(RepositoryError::NothingToCommit.into());
        }

        let (head_oid, head) = self.head_commit()?;

        let mut snapshot = head.snapshot().clone();
        {
            let index = self.index();
            for (path, oid) in index.additions() {
                snapshot.insert(path.clone(), oid.clone());
            }
            for path in index.removals() {
                snapshot.remove(path);
            }
        }

        let commit = Commit::new(
            Some(head_oid),
            merge_parent,
            Commit::timestamp_from_env(),
            snapshot,
            message.to_string(),
        );
        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(commit_id.clone())?;

        let mut index = self.index_mut();
        index.clear();
        index.write_updates()?;

        Ok(commit_id)
    }
}
