use crate::areas::repository::Repository;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::cmp::Reverse;

impl Repository {
    /// First-parent history from HEAD down to the root, newest first
    pub fn log(&self) -> anyhow::Result<Vec<LogEntry>> {
        self.ensure_initialized()?;

        let head_oid = self.refs().read_head()?;

        RevList::new(self.database(), head_oid)
            .into_iter()
            .map(|entry| entry.map(|(oid, commit)| LogEntry::new(oid, commit)))
            .collect()
    }

    /// Every commit in the store, newest first, ties broken by id
    pub fn global_log(&self) -> anyhow::Result<Vec<LogEntry>> {
        self.ensure_initialized()?;

        let mut entries = Vec::new();
        for oid in self.database().list_objects()? {
            if let ObjectBox::Commit(commit) = self.database().parse_object(&oid)? {
                entries.push(LogEntry::new(oid, *commit));
            }
        }

        entries.sort_by(|a, b| {
            Reverse(a.commit.timestamp())
                .cmp(&Reverse(b.commit.timestamp()))
                .then_with(|| a.oid.cmp(&b.oid))
        });

        Ok(entries)
    }

    /// Ids of every commit whose message is exactly `message`
    pub fn find(&self, message: &str) -> anyhow::Result<Vec<ObjectId>> {
        let found = self
            .global_log()?
            .into_iter()
            .filter(|entry| entry.commit.message() == message)
            .map(|entry| entry.oid)
            .collect::<Vec<_>>();

        if found.is_empty() {
            return Err(RepositoryError::NoCommitWithMessage.into());
        }

        Ok(found)
    }
}
