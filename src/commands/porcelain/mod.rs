//! Porcelain commands
//!
//! - `init`: create a repository with its root commit
//! - `add` / `rm`: stage additions and removals
//! - `commit`: record the staging area
//! - `log`: first-parent history, every stored commit, commits by message
//! - `status`: branches, staged and removed files, unstaged modifications, untracked files
//! - `checkout`: switch branches or restore single files
//! - `branch`: create and delete branches
//! - `reset`: move the current branch and working tree to a commit
//! - `merge`: three-way merge of another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
