//! twig: a local, single-user version-control engine
//!
//! - `areas`: the stateful parts of a repository (object store, staging area, refs, workspace)
//! - `artifacts`: object model and the algorithms that operate on it
//! - `commands`: repository operations, one file per command
//! - `errors`: the error kinds callers can tell apart

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Name of the directory holding repository metadata inside the working directory
pub const REPOSITORY_DIR: &str = ".twig";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";
