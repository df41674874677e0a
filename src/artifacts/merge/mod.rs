//! Three-way merge
//!
//! - `merge_base`: nearest common ancestor of two commits
//! - `three_way`: per-path classification against the merge base and conflict file synthesis
//! - `merge_outcome`: what a merge did, as reported to the caller
//!
//! ## Debug Logging
//!
//! Building with `--features debug_merge` traces the merge base traversal on stderr.

/// Trace output compiled in only with the `debug_merge` feature
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod merge_base;
pub mod merge_outcome;
pub mod three_way;
