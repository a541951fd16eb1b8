//! Retrieval URL composition for the asset-serving collaborator.
//!
//! Paths are embedded as base64 tokens so filesystem separators never
//! appear as literal URL segments; the serving side decodes the token back
//! to the original path.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::models::entry::AccessUrls;

/// Opaque reversible token for a filesystem path.
pub fn path_token(path: &str) -> String {
    BASE64.encode(path)
}

/// URL triple for image entries. Thumbnail, lazy and canonical retrieval
/// share one grammar keyed by the configured thumbnail size.
pub fn image_urls(
    path: &str,
    extension: &str,
    mime: &str,
    id: &str,
    (thumb_w, thumb_h): (u32, u32),
) -> AccessUrls {
    let url = format!(
        "/api/images/{}/t/{}/d/{}/{}/m/{}/{}",
        path_token(path),
        extension,
        thumb_w,
        thumb_h,
        mime,
        id
    );
    AccessUrls::Image {
        img_url: url.clone(),
        img_lazy_url: url.clone(),
        file_path: url,
    }
}

/// Generic raw-file retrieval URL. Unknown extension or MIME leave their
/// segments empty; the serving side treats empty as octet-stream.
pub fn file_url(
    path: &str,
    extension: Option<&str>,
    mime: Option<&str>,
    size: u64,
    id: &str,
) -> AccessUrls {
    AccessUrls::File {
        file_path: format!(
            "/api/files/{}/t/{}/m/{}/s/{}/{}",
            path_token(path),
            extension.unwrap_or(""),
            mime.unwrap_or(""),
            size,
            id
        ),
    }
}

/// Token for the extension-keyed fallback icon shown when no thumbnail
/// applies.
pub fn ext_icon_token(extension: &str) -> String {
    path_token(&format!("/api/thirdParty/{extension}.svg"))
}
