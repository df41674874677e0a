use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;
use std::path::Path;

/// Compares working files against recorded blob ids
#[derive(new)]
pub struct Inspector<'r> {
    workspace: &'r Workspace,
}

impl<'r> Inspector<'r> {
    /// Blob id the working file would get, `None` when the file is missing
    pub fn content_oid(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        if !self.workspace.file_exists(path) {
            return Ok(None);
        }

        let blob = self.workspace.parse_blob(path)?;
        Ok(Some(blob.object_id()?))
    }

    /// How the working file differs from `recorded`, `None` when it matches
    pub fn compare(
        &self,
        path: &Path,
        recorded: &ObjectId,
    ) -> anyhow::Result<Option<WorkspaceChangeType>> {
        match self.content_oid(path)? {
            None => Ok(Some(WorkspaceChangeType::Deleted)),
            Some(oid) if &oid != recorded => Ok(Some(WorkspaceChangeType::Modified)),
            Some(_) => Ok(None),
        }
    }
}
