//! Entry description and directory listing.
//!
//! `describe` builds the one outward-facing record of the adapter: it stats
//! an entry, branches on file vs directory, sniffs the binary type, probes
//! image dimensions and composes retrieval URLs. Nothing is cached; every
//! call recomputes from current filesystem state.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::error::AdapterError;
use crate::models::entry::{DirInfo, EntryInfo, FileInfo, DIR_COLOR, DIR_MIME};
use crate::services::{detect, identity, urls};

fn to_utc(t: std::io::Result<SystemTime>) -> Option<DateTime<Utc>> {
    t.ok().map(DateTime::<Utc>::from)
}

#[cfg(unix)]
fn owner_uid(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    meta.uid()
}

#[cfg(not(unix))]
fn owner_uid(_meta: &fs::Metadata) -> u32 {
    0
}

fn stat(path: &Path) -> Result<fs::Metadata, AdapterError> {
    fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AdapterError::NotFound(path.display().to_string()),
        ErrorKind::NotADirectory => AdapterError::NotADirectory(path.display().to_string()),
        _ => AdapterError::Io(e),
    })
}

/// Build the metadata record for one child of `parent`.
///
/// A missing entry is fatal for this call. Sniffing and probing failures
/// degrade the record (absent mime/extension or width/height) instead.
pub fn describe(parent: &Path, name: &str, thumb: (u32, u32)) -> Result<EntryInfo, AdapterError> {
    let full = parent.join(name);
    let meta = stat(&full)?;

    let path = full.to_string_lossy().to_string();
    let id = identity::entry_id(&path, meta.modified().ok());
    let created_date = to_utc(meta.created());
    let modified_date = to_utc(meta.modified());
    let assigned_date = to_utc(meta.accessed());
    let uid = owner_uid(&meta);

    if meta.is_dir() {
        return Ok(EntryInfo::Dir(DirInfo {
            name: name.to_string(),
            path,
            id,
            mime_type: DIR_MIME.to_string(),
            color: DIR_COLOR.to_string(),
            uid,
            created_date,
            modified_date,
            assigned_date,
        }));
    }

    let sniffed = match detect::sniff(&full) {
        Ok(s) => s,
        Err(err) => {
            tracing::warn!(
                path = %full.display(),
                error = %err,
                "type sniff failed, degrading record"
            );
            None
        }
    };
    let (extension, mime_type) = match sniffed {
        Some(s) => (Some(s.extension), Some(s.mime)),
        None => (None, None),
    };

    let size = meta.len();
    let (width, height, access) = match mime_type.as_deref() {
        Some(mime) if detect::is_raster(mime) => {
            let ext = extension.as_deref().unwrap_or_default();
            let access = urls::image_urls(&path, ext, mime, &id, thumb);
            match detect::dimensions(&full) {
                Ok((w, h)) => (Some(w), Some(h), access),
                Err(err) => {
                    tracing::warn!(
                        path = %full.display(),
                        error = %err,
                        "dimension probe failed, omitting width/height"
                    );
                    (None, None, access)
                }
            }
        }
        _ => (
            None,
            None,
            urls::file_url(&path, extension.as_deref(), mime_type.as_deref(), size, &id),
        ),
    };

    let ext_img = extension.as_deref().map(urls::ext_icon_token);

    Ok(EntryInfo::File(FileInfo {
        name: name.to_string(),
        path,
        id,
        extension,
        mime_type,
        size,
        width,
        height,
        uid,
        created_date,
        modified_date,
        assigned_date,
        ext_img,
        access,
    }))
}

/// Describe every immediate child of `dir`, in enumeration order.
///
/// A child that fails to describe (deleted mid-listing) is skipped; only a
/// missing or non-directory `dir` fails the whole call.
pub fn list(dir: &Path, thumb: (u32, u32)) -> Result<Vec<EntryInfo>, AdapterError> {
    if !stat(dir)?.is_dir() {
        return Err(AdapterError::NotADirectory(dir.display().to_string()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        match describe(dir, &name, thumb) {
            Ok(info) => entries.push(info),
            Err(err) => {
                tracing::warn!(
                    dir = %dir.display(),
                    name = %name,
                    error = %err,
                    "skipping entry that failed to describe"
                );
            }
        }
    }
    Ok(entries)
}
