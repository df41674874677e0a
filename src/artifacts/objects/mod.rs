//! Stored object kinds and their codec
//!
//! Two kinds of objects live in the store, both identified by the SHA-1 of their
//! serialized form:
//!
//! - **Blob**: raw file content
//! - **Commit**: message, timestamp, parent links, and the path → blob snapshot
//!
//! Serialized form: `<kind> <size>\0<body>`

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of an abbreviated object id as shown in merge log lines
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
