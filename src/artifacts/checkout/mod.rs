//! Working-tree reconciliation
//!
//! Moving the working directory from one commit's snapshot to another:
//! - `migration`: plans the file writes and deletions, then hands them to the workspace
//! - `conflict`: finds untracked files a migration would overwrite
//!
//! Conflicts are detected before any file is touched, so a refused checkout
//! leaves the working directory exactly as it was.

pub mod conflict;
pub mod migration;
