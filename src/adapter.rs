use std::env;
use std::path::{Path, PathBuf};

use crate::error::AdapterError;
use crate::models::entry::EntryInfo;
use crate::scope_path;
use crate::services::{fs_ops, listing};

/// Default thumbnail size requested from the image collaborator.
pub const DEFAULT_THUMB_SIZE: (u32, u32) = (200, 200);

/// Filesystem adapter confined to a root directory.
///
/// All paths passed to the instance methods are interpreted relative to the
/// root; anything resolving outside it is rejected before touching the
/// filesystem. The adapter is immutable after construction and keeps no
/// cache, so clones and concurrent callers recompute independently.
#[derive(Debug, Clone)]
pub struct LocalAdapter {
    root: PathBuf,
    thumb_size: (u32, u32),
}

impl LocalAdapter {
    /// Build an adapter rooted at `root`. An invalid root falls back to the
    /// process working directory instead of failing construction.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = if root.is_dir() {
            root
        } else {
            let fallback = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            tracing::warn!(
                root = %root.display(),
                fallback = %fallback.display(),
                "configured root is not a directory, using working directory"
            );
            fallback
        };
        Self {
            root,
            thumb_size: DEFAULT_THUMB_SIZE,
        }
    }

    pub fn with_thumbnail_size(mut self, width: u32, height: u32) -> Self {
        self.thumb_size = (width, height);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative: &str) -> Result<PathBuf, AdapterError> {
        scope_path::resolve(&self.root, relative)
            .ok_or_else(|| AdapterError::NotFound(relative.to_string()))
    }

    /// List the immediate children of a directory under the root.
    pub fn list(&self, relative: &str) -> Result<Vec<EntryInfo>, AdapterError> {
        listing::list(&self.resolve(relative)?, self.thumb_size)
    }

    /// Describe one named child of a directory under the root.
    pub fn describe(&self, parent: &str, name: &str) -> Result<EntryInfo, AdapterError> {
        if name.contains(['/', '\\']) || name == ".." {
            return Err(AdapterError::NotFound(name.to_string()));
        }
        listing::describe(&self.resolve(parent)?, name, self.thumb_size)
    }

    /// Create a directory under the root; succeeds if it already exists.
    pub fn create_dir(&self, relative: &str) -> Result<(), AdapterError> {
        fs_ops::create_dir(&self.resolve(relative)?)
    }

    /// Copy a file or directory tree, both endpoints under the root.
    pub fn copy(&self, src: &str, dst: &str) -> Result<(), AdapterError> {
        fs_ops::copy(&self.resolve(src)?, &self.resolve(dst)?)
    }

    /// Delete a file or directory tree under the root. `Ok(false)` when the
    /// path was already gone.
    pub fn delete(&self, relative: &str) -> Result<bool, AdapterError> {
        fs_ops::delete(&self.resolve(relative)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn invalid_root_falls_back_to_working_directory() {
        let adapter = LocalAdapter::new("/nonexistent/root/1234567890");
        assert_eq!(adapter.root(), env::current_dir().unwrap().as_path());
    }

    #[test]
    fn escaping_paths_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = LocalAdapter::new(dir.path());

        assert!(matches!(
            adapter.list("../"),
            Err(AdapterError::NotFound(_))
        ));
        assert!(matches!(
            adapter.delete("../../etc"),
            Err(AdapterError::NotFound(_))
        ));
        assert!(matches!(
            adapter.describe("", "../secret"),
            Err(AdapterError::NotFound(_))
        ));
    }

    #[test]
    fn lists_and_describes_under_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("photos")).unwrap();
        fs::write(dir.path().join("photos/note.txt"), "hi").unwrap();

        let adapter = LocalAdapter::new(dir.path());
        let entries = adapter.list("photos").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "note.txt");

        let entry = adapter.describe("photos", "note.txt").unwrap();
        assert_eq!(entry.id(), entries[0].id());
    }

    #[test]
    fn manages_directories_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = LocalAdapter::new(dir.path());

        adapter.create_dir("staging").unwrap();
        fs::write(dir.path().join("staging/a.txt"), "a").unwrap();

        adapter.copy("staging", "published").unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("published/a.txt")).unwrap(),
            "a"
        );

        assert!(adapter.delete("staging").unwrap());
        assert!(!dir.path().join("staging").exists());
        assert!(!adapter.delete("staging").unwrap());
    }

    #[test]
    fn custom_thumbnail_size_flows_into_urls() {
        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::new(2, 2)
            .save(dir.path().join("tiny.png"))
            .unwrap();

        let adapter = LocalAdapter::new(dir.path()).with_thumbnail_size(64, 64);
        let EntryInfo::File(info) = adapter.describe("", "tiny.png").unwrap() else {
            panic!("expected file record");
        };
        let serialized = serde_json::to_value(&info).unwrap();
        assert!(serialized["img_url"]
            .as_str()
            .unwrap()
            .contains("/d/64/64/"));
    }
}
