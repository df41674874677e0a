//! Repository operations, one file per command
//!
//! - `plumbing`: low-level object access (hash-object, cat-file) and commit creation
//! - `porcelain`: the user-facing workflow (init, add, rm, commit, log, status, checkout, branch, reset, merge)
//!
//! Every command checks its preconditions before mutating anything, so a failed
//! command leaves the repository as it found it.

pub mod plumbing;
pub mod porcelain;
