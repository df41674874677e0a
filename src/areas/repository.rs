use crate::REPOSITORY_DIR;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::merge_base::MergeBaseFinder;
use crate::artifacts::objects::commit::{Commit, Snapshot};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::status_info::Status;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::cell::{Ref, RefCell, RefMut};
use std::path::{Component, Path, PathBuf};

/// Explicit repository context handed to every operation
///
/// Owns the four areas of a repository rooted at a working directory. Nothing
/// is read from disk until a command asks for it.
pub struct Repository {
    path: Box<Path>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create directory {}", path.display()))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;
        let repository_path = path.join(REPOSITORY_DIR);

        let index = Index::new(repository_path.join("index").into_boxed_path());
        let database = Database::new(repository_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(repository_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `.twig` directory
    pub fn repository_path(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    pub fn index(&self) -> Ref<'_, Index> {
        self.index.borrow()
    }

    pub fn index_mut(&self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn status(&'_ self) -> Status<'_> {
        Status::new(&self.workspace)
    }

    pub fn is_initialized(&self) -> bool {
        self.repository_path().is_dir()
    }

    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::NotInitialized.into())
        }
    }

    /// Check the repository exists and load the staging area
    pub fn open(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;
        self.index_mut().rehydrate()
    }

    pub fn head_commit(&self) -> anyhow::Result<(ObjectId, Commit)> {
        let head_oid = self.refs.read_head()?;
        let commit = self.database.load_commit(&head_oid)?;

        Ok((head_oid, commit))
    }

    /// Parse a branch name that must name an existing branch
    pub fn existing_branch(&self, name: &str) -> anyhow::Result<BranchName> {
        let no_such_branch = || RepositoryError::NoSuchBranch {
            name: name.to_string(),
        };

        let branch_name = BranchName::try_parse(name.to_string()).map_err(|_| no_such_branch())?;
        if !self.refs.branch_exists(&branch_name) {
            return Err(no_such_branch().into());
        }

        Ok(branch_name)
    }

    /// Turn a user-supplied path into a normalized one relative to the working
    /// directory, rejecting paths that leave it
    pub fn relative_path(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let outside = || RepositoryError::PathOutsideRepository {
            path: path.to_path_buf(),
        };

        let relative = if path.is_absolute() {
            path.strip_prefix(&self.path).map_err(|_| outside())?
        } else {
            path
        };

        let mut normalized = PathBuf::new();
        for component in relative.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if !normalized.pop() {
                        return Err(outside().into());
                    }
                }
                Component::Normal(part) => normalized.push(part),
                Component::RootDir | Component::Prefix(_) => return Err(outside().into()),
            }
        }

        Ok(normalized)
    }

    pub fn find_merge_base(
        &self,
        head: &ObjectId,
        target: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let finder = MergeBaseFinder::new(|oid: &ObjectId| {
            Ok(self.database.load_commit(oid)?.to_slim(oid.clone()))
        });

        finder.find_merge_base(head, target)
    }

    /// Move the working directory from `current` to `target`
    ///
    /// Fails with `UntrackedFileConflict` before touching any file if an
    /// untracked working file would be overwritten.
    pub fn migrate(&self, current: &Snapshot, target: &Snapshot) -> anyhow::Result<()> {
        let migration = Migration::new(&self.database, current, target);
        let working_files = self.workspace.list_files()?;

        migration.check_conflicts(&self.index(), &working_files)?;
        self.workspace.apply_migration(&migration)
    }
}
