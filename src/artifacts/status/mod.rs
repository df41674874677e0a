//! Working tree status
//!
//! Compares the working directory against HEAD's snapshot and the staging
//! area, sorting every path into the sections `status` prints.
//!
//! ## Components
//!
//! - `file_change`: how a working file differs from what is recorded
//! - `inspector`: content comparisons between working files and blobs
//! - `status_info`: section assembly and rendering

pub mod file_change;
pub mod inspector;
pub mod status_info;
