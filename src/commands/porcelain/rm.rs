use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use std::path::Path;

impl Repository {
    /// Un-stage a path and, when HEAD tracks it, stage its removal and
    /// delete the working file
    pub fn rm(&mut self, path: &Path) -> anyhow::Result<()> {
        self.open()?;

        let path = self.relative_path(path)?;
        let (_, head) = self.head_commit()?;
        let staged = self.index().is_staged_for_addition(&path);
        let tracked = head.tracks(&path);

        if !staged && !tracked {
            return Err(RepositoryError::NothingToRemove { path }.into());
        }

        let mut index = self.index_mut();
        if staged {
            index.cancel_add(&path);
        }
        if tracked {
            self.workspace().remove_file(&path)?;
            index.stage_remove(path);
        }

        index.write_updates()
    }
}
