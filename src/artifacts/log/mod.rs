//! Commit history listing
//!
//! - `rev_list`: walks primary parents from a starting commit back to the root
//! - `log_entry`: one rendered commit of `log` / `global-log` output

pub mod log_entry;
pub mod rev_list;
