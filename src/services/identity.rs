//! Deterministic entry identifiers derived from path and modification time.

use std::time::SystemTime;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Canonical string form of a modification timestamp, shared by the record
/// fields and the identity digest.
pub fn canonical_mtime(mtime: SystemTime) -> String {
    DateTime::<Utc>::from(mtime).to_rfc3339()
}

/// Stable identifier for an entry: SHA-256 over the full path plus the
/// canonical mtime string, hex-encoded. Unchanged path and mtime always
/// produce the same id; touching the file changes it.
///
/// This is a display key, not content addressing. Two roots mounted
/// together could in principle collide on identical path+mtime pairs.
pub fn entry_id(path: &str, mtime: Option<SystemTime>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    if let Some(t) = mtime {
        hasher.update(canonical_mtime(t).as_bytes());
    }
    hex::encode(hasher.finalize())
}
