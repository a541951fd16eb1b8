//! Directory creation, recursive copy and recursive delete.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::AdapterError;

#[cfg(unix)]
fn dir_builder() -> fs::DirBuilder {
    use std::os::unix::fs::DirBuilderExt;
    let mut builder = fs::DirBuilder::new();
    builder.mode(0o755);
    builder
}

#[cfg(not(unix))]
fn dir_builder() -> fs::DirBuilder {
    fs::DirBuilder::new()
}

/// Create a directory, treating "already exists" as success.
pub fn create_dir(path: &Path) -> Result<(), AdapterError> {
    match dir_builder().create(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Copy a file or mirror a directory tree into `dst`.
///
/// Symlinks are reproduced as links, never dereferenced, so a cyclic link
/// tree cannot recurse. Fails with `NotFound` when `src` does not exist; a
/// partially written destination from a failed copy is left as-is.
pub fn copy(src: &Path, dst: &Path) -> Result<(), AdapterError> {
    let meta = fs::symlink_metadata(src).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AdapterError::NotFound(src.display().to_string()),
        _ => AdapterError::Io(e),
    })?;

    if meta.is_dir() {
        copy_dir_recursive(src, dst)
    } else if meta.file_type().is_symlink() {
        copy_symlink(src, dst)
    } else {
        fs::copy(src, dst)?;
        Ok(())
    }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<(), AdapterError> {
    create_dir(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let dest_child = dst.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            copy_dir_recursive(&entry.path(), &dest_child)?;
        } else if file_type.is_symlink() {
            copy_symlink(&entry.path(), &dest_child)?;
        } else {
            fs::copy(entry.path(), &dest_child)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<(), AdapterError> {
    let target = fs::read_link(src)?;
    std::os::unix::fs::symlink(target, dst)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<(), AdapterError> {
    // Windows distinguishes file and directory links; fall back to bytes.
    fs::copy(src, dst)?;
    Ok(())
}

/// Remove a file or directory tree. Returns `Ok(false)` when the path is
/// already gone.
///
/// Children are removed before their parent. The walk does not follow
/// symlinks, so cyclic link trees terminate; links themselves are unlinked.
pub fn delete(path: &Path) -> Result<bool, AdapterError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    if !meta.is_dir() {
        fs::remove_file(path)?;
        return Ok(true);
    }

    for entry in WalkDir::new(path).follow_links(false).contents_first(true) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(true)
}
