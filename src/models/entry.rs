use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display color clients use for directory rows.
pub const DIR_COLOR: &str = "#3949AB";

/// Pseudo MIME type reported for directories.
pub const DIR_MIME: &str = "directory";

/// One filesystem entry as reported to the caller.
///
/// Serializes with a `"type"` tag of `"file"` or `"dir"`; fields that do
/// not apply to a variant are absent rather than empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryInfo {
    File(FileInfo),
    Dir(DirInfo),
}

impl EntryInfo {
    pub fn name(&self) -> &str {
        match self {
            EntryInfo::File(f) => &f.name,
            EntryInfo::Dir(d) => &d.name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            EntryInfo::File(f) => &f.path,
            EntryInfo::Dir(d) => &d.path,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            EntryInfo::File(f) => &f.id,
            EntryInfo::Dir(d) => &d.id,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, EntryInfo::Dir(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub path: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub uid: u32,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
    pub assigned_date: Option<DateTime<Utc>>,
    /// Token for the extension-keyed fallback icon, absent when the
    /// extension is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_img: Option<String>,
    #[serde(flatten)]
    pub access: AccessUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirInfo {
    pub name: String,
    pub path: String,
    pub id: String,
    /// Always [`DIR_MIME`].
    pub mime_type: String,
    /// Always [`DIR_COLOR`].
    pub color: String,
    pub uid: u32,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
    pub assigned_date: Option<DateTime<Utc>>,
}

/// Retrieval URLs for a file. Image entries get the thumbnail triple,
/// everything else the single generic URL; the two never mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccessUrls {
    Image {
        img_url: String,
        img_lazy_url: String,
        file_path: String,
    },
    File {
        file_path: String,
    },
}

impl AccessUrls {
    /// The canonical retrieval URL regardless of variant.
    pub fn file_path(&self) -> &str {
        match self {
            AccessUrls::Image { file_path, .. } => file_path,
            AccessUrls::File { file_path } => file_path,
        }
    }
}
