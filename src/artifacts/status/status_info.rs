use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub branches: Vec<BranchName>,
    pub current_branch: BranchName,
    pub staged_files: FileSet,
    pub removed_files: FileSet,
    pub modified_files: ChangeSet,
    pub untracked_files: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    workspace: &'r Workspace,
}

impl<'r> Status<'r> {
    pub fn initialize(
        &self,
        head: &Snapshot,
        index: &Index,
        branches: Vec<BranchName>,
        current_branch: BranchName,
    ) -> anyhow::Result<StatusInfo> {
        let inspector = Inspector::new(self.workspace);

        let removed_files = index.removals().clone();

        // a staged file whose working copy drifted is only reported as modified
        let mut staged_files = FileSet::new();
        let mut modified_files = ChangeSet::new();
        for (path, oid) in index.additions() {
            match inspector.compare(path, oid)? {
                Some(change) => {
                    modified_files.insert(path.clone(), change);
                }
                None => {
                    staged_files.insert(path.clone());
                }
            }
        }
        for (path, oid) in head {
            if index.is_staged_for_addition(path) || index.is_staged_for_removal(path) {
                continue;
            }
            if let Some(change) = inspector.compare(path, oid)? {
                modified_files.insert(path.clone(), change);
            }
        }

        // a file staged for removal but re-created counts as untracked
        let untracked_files = self
            .workspace
            .list_files()?
            .into_iter()
            .filter(|path| {
                index.is_staged_for_removal(path)
                    || (!head.contains_key(path) && !index.is_staged_for_addition(path))
            })
            .collect::<FileSet>();

        Ok(StatusInfo {
            branches,
            current_branch,
            staged_files,
            removed_files,
            modified_files,
            untracked_files,
        })
    }
}

impl StatusInfo {
    fn write_section(
        f: &mut fmt::Formatter<'_>,
        title: &str,
        lines: impl IntoIterator<Item = String>,
    ) -> fmt::Result {
        writeln!(f, "=== {} ===", title)?;
        for line in lines {
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_section(
            f,
            "Branches",
            self.branches.iter().map(|branch| {
                if branch == &self.current_branch {
                    format!("*{}", branch)
                } else {
                    branch.to_string()
                }
            }),
        )?;
        writeln!(f)?;

        Self::write_section(
            f,
            "Staged Files",
            self.staged_files.iter().map(|path| path.display().to_string()),
        )?;
        writeln!(f)?;

        Self::write_section(
            f,
            "Removed Files",
            self.removed_files.iter().map(|path| path.display().to_string()),
        )?;
        writeln!(f)?;

        Self::write_section(
            f,
            "Modifications Not Staged For Commit",
            self.modified_files
                .iter()
                .map(|(path, change)| format!("{} {}", path.display(), change)),
        )?;
        writeln!(f)?;

        Self::write_section(
            f,
            "Untracked Files",
            self.untracked_files.iter().map(|path| path.display().to_string()),
        )
    }
}
