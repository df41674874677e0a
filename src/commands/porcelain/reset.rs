use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;

impl Repository {
    /// Check out every file of a commit and move the current branch to it
    ///
    /// Files tracked by HEAD but absent from the commit are deleted and the
    /// staging area is cleared.
    pub fn reset(&mut self, commit_id: &str) -> anyhow::Result<()> {
        self.open()?;

        let target_oid = Revision::try_parse(commit_id)?.resolve_commit(self.database())?;
        let target = self.database().load_commit(&target_oid)?;
        let (_, head) = self.head_commit()?;

        self.migrate(head.snapshot(), target.snapshot())?;
        self.refs().update_head(target_oid)?;

        let mut index = self.index_mut();
        index.clear();
        index.write_updates()
    }
}
