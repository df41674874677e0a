use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::errors::RepositoryError;
use std::path::Path;

impl Repository {
    /// Stage a working file
    ///
    /// Content identical to HEAD's version un-stages the path instead,
    /// cancelling a pending removal as well.
    pub fn add(&mut self, path: &Path) -> anyhow::Result<()> {
        self.open()?;

        let path = self.relative_path(path)?;
        if !self.workspace().file_exists(&path) {
            return Err(RepositoryError::FileNotFound { path }.into());
        }

        let blob = self.workspace().parse_blob(&path)?;
        let blob_id = blob.object_id()?;
        let (_, head) = self.head_commit()?;

        let mut index = self.index_mut();
        if head.blob_id(&path) == Some(&blob_id) {
            index.cancel_add(&path);
            index.cancel_remove(&path);
        } else {
            self.database().store(&blob)?;
            index.stage_add(path, blob_id);
        }

        index.write_updates()
    }
}
