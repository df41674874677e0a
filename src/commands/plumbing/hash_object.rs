use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::path::Path;

impl Repository {
    /// Blob id of a working file, storing the blob when `write` is set
    pub fn hash_object(&mut self, path: &Path, write: bool) -> anyhow::Result<ObjectId> {
        let path = self.relative_path(path)?;
        if !self.workspace().file_exists(&path) {
            return Err(RepositoryError::FileNotFound { path }.into());
        }

        let blob = self.workspace().parse_blob(&path)?;

        if write {
            self.ensure_initialized()?;
            self.database().store(&blob)
        } else {
            blob.object_id()
        }
    }
}
