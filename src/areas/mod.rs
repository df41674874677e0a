//! Stateful repository areas
//!
//! - `database`: content-addressed object store
//! - `index`: staging area
//! - `refs`: branches and HEAD
//! - `repository`: the context object owning the other areas
//! - `workspace`: working directory file operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
