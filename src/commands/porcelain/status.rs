use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusInfo;

impl Repository {
    pub fn status_info(&self) -> anyhow::Result<StatusInfo> {
        self.open()?;

        let (_, head) = self.head_commit()?;
        let branches = self.refs().list_branches()?;
        let current_branch = self.refs().current_branch()?;

        self.status()
            .initialize(head.snapshot(), &self.index(), branches, current_branch)
    }
}
