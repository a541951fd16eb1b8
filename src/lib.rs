//! mediafs - local filesystem adapter for a media manager.
//!
//! Lists a sandboxed directory tree, describes each entry (stable id,
//! sniffed type, image dimensions, retrieval URLs for the asset-serving
//! side) and offers create/copy/delete management under the root.

mod adapter;
mod error;
mod models;
pub(crate) mod scope_path;
mod services;

pub use adapter::{LocalAdapter, DEFAULT_THUMB_SIZE};
pub use error::AdapterError;
pub use models::entry::{AccessUrls, DirInfo, EntryInfo, FileInfo, DIR_COLOR, DIR_MIME};
