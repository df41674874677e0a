//! Plumbing commands
//!
//! - `hash-object`: compute a file's blob id, optionally storing it
//! - `cat-file`: print the decoded body of a stored object
//! - `write_commit`: commit creation shared by `commit` and `merge`

pub mod cat_file;
pub mod hash_object;
mod write_commit;
