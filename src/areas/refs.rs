//! Branch references and HEAD
//!
//! - Branches: `refs/heads/<name>` files holding a 40-hex commit id
//! - HEAD: `ref: refs/heads/<name>`, a pointer to the active branch
//!
//! HEAD never holds a commit id directly. Every HEAD-relative lookup goes
//! HEAD → branch → commit.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.twig`)
    path: Box<Path>,
}

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Content of a ref file
#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef { sym_ref_name: SymRefName },
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].to_string()),
            }))
        } else {
            Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(
                content.to_string(),
            )?)))
        }
    }
}

impl Refs {
    /// The ref HEAD points at, e.g. `refs/heads/master`
    pub fn current_ref(&self) -> anyhow::Result<SymRefName> {
        match SymRefOrOid::read_symref_or_oid(&self.head_path())? {
            Some(SymRefOrOid::SymRef { sym_ref_name }) => Ok(sym_ref_name),
            Some(SymRefOrOid::Oid(oid)) => {
                anyhow::bail!("HEAD holds commit {} instead of a branch", oid)
            }
            None => anyhow::bail!("HEAD is missing or empty"),
        }
    }

    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        BranchName::try_parse_sym_ref_name(&self.current_ref()?)
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(branch_name == &self.current_branch()?)
    }

    /// Commit id of the active branch
    pub fn read_head(&self) -> anyhow::Result<ObjectId> {
        let current_ref = self.current_ref()?;

        self.read_oid(&current_ref)?
            .with_context(|| format!("HEAD points at missing branch {}", current_ref))
    }

    /// Advance the active branch to `oid`
    pub fn update_head(&self, oid: ObjectId) -> anyhow::Result<()> {
        let current_branch = self.current_branch()?;
        self.move_branch(&current_branch, oid)
    }

    /// Repoint HEAD at another branch without touching any branch tip
    pub fn set_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(
            self.head_path(),
            format!("ref: {}", branch_name.to_sym_ref_name()),
        )
    }

    fn read_oid(&self, sym_ref_name: &SymRefName) -> anyhow::Result<Option<ObjectId>> {
        let path = self.path.join(sym_ref_name.as_ref_path());

        match SymRefOrOid::read_symref_or_oid(&path)? {
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            Some(SymRefOrOid::SymRef { sym_ref_name }) => {
                anyhow::bail!("ref {:?} is symbolic ({}), expected a commit", path, sym_ref_name)
            }
            None => Ok(None),
        }
    }

    pub fn read_ref(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        self.read_oid(&branch_name.to_sym_ref_name())
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    fn update_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut()
            .write_all(raw_ref.as_bytes())
            .with_context(|| format!("failed to write ref file at {:?}", path))?;

        Ok(())
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            return Err(RepositoryError::BranchAlreadyExists {
                name: name.to_string(),
            }
            .into());
        }

        self.update_ref_file(self.branch_path(name), source_oid.as_ref().into())
    }

    /// Point an existing or new branch at `oid`
    pub fn move_branch(&self, name: &BranchName, oid: ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(self.branch_path(name), oid.as_ref().into())
    }

    /// Remove a branch file and return the commit it pointed to
    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<ObjectId> {
        let branch_path = self.branch_path(name);

        match self.read_ref(name)? {
            Some(oid) => {
                std::fs::remove_file(branch_path.as_ref()).with_context(|| {
                    format!("failed to delete branch file at {:?}", branch_path)
                })?;
                self.prune_branch_empty_parent_dirs(branch_path.as_ref())?;

                Ok(oid)
            }
            None => Err(RepositoryError::NoSuchBranch {
                name: name.to_string(),
            }
            .into()),
        }
    }

    /// Every branch name, sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let relative_path = entry
                    .path()
                    .strip_prefix(&heads_path)
                    .with_context(|| format!("ref {:?} is outside refs/heads", entry.path()))?;
                BranchName::try_parse(relative_path.to_string_lossy().to_string())
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        branches.sort();
        Ok(branches)
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn branch_path(&self, name: &BranchName) -> Box<Path> {
        self.heads_path().join(name.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
