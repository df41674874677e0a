//! Repository error kinds
//!
//! Every precondition a command checks before mutating anything maps to one of
//! these variants. Commands return them wrapped in `anyhow::Error`; callers
//! recover the kind with `downcast_ref::<RepositoryError>()`. Storage failures
//! are not listed here and surface as plain `anyhow` errors with path context.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Not in an initialized Twig directory.")]
    NotInitialized,

    #[error("A Twig version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("File does not exist.")]
    FileNotFound { path: PathBuf },

    #[error("File is outside the repository.")]
    PathOutsideRepository { path: PathBuf },

    #[error("File does not exist in that commit.")]
    FileNotInCommit { path: PathBuf },

    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("No reason to remove the file.")]
    NothingToRemove { path: PathBuf },

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("A branch with that name does not exist.")]
    NoSuchBranch { name: String },

    #[error("Invalid branch name: {name}")]
    InvalidBranchName { name: String },

    #[error("A branch with that name already exists.")]
    BranchAlreadyExists { name: String },

    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrentBranch,

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("Cannot merge a branch with itself.")]
    CannotMergeSelf,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    /// Carries every working file that would be overwritten, sorted
    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileConflict { paths: Vec<PathBuf> },

    #[error("No commit with that id exists.")]
    NoSuchCommit { id: String },

    #[error("short id {prefix} is ambiguous")]
    AmbiguousCommitId {
        prefix: String,
        candidates: Vec<String>,
    },
}

/// Extracts the repository error kind from an `anyhow` error, if it carries one
pub fn error_kind(error: &anyhow::Error) -> Option<&RepositoryError> {
    error.downcast_ref::<RepositoryError>()
}
