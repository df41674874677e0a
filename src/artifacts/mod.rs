//! Data types and algorithms with no repository state of their own
//!
//! - `branch`: branch names and revision parsing
//! - `checkout`: working-tree migration and untracked-file conflicts
//! - `core`: output plumbing (pager wrapper)
//! - `index`: staging-area file format
//! - `log`: first-parent history and log entries
//! - `merge`: merge base, three-way classification and merge outcomes
//! - `objects`: blobs, commits and their codec
//! - `status`: working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
