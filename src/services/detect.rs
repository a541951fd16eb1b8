//! File type detection using magic numbers with extension-based fallback,
//! plus header-only image dimension probing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::AdapterError;

/// Bytes read for signature sniffing, bounded regardless of file size.
pub const SNIFF_LEN: u64 = 8192;

/// Result of a successful type sniff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sniffed {
    pub extension: String,
    pub mime: String,
}

/// Raster formats the dimension probe is run on.
pub fn is_raster(mime: &str) -> bool {
    matches!(mime, "image/jpeg" | "image/png")
}

/// Classify a file by its leading bytes. `Ok(None)` means the type is
/// unknown (unrecognized signature and no usable extension); the caller
/// degrades the record instead of failing.
pub fn sniff(path: &Path) -> std::io::Result<Option<Sniffed>> {
    let mut head = Vec::with_capacity(SNIFF_LEN as usize);
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;

    if let Some(kind) = infer::get(&head) {
        return Ok(Some(Sniffed {
            extension: kind.extension().to_string(),
            mime: kind.mime_type().to_string(),
        }));
    }

    // Unknown signature: trust the filename extension if there is one.
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) if !e.is_empty() => e.to_ascii_lowercase(),
        _ => return Ok(None),
    };
    Ok(mime_guess::from_ext(&ext).first().map(|m| Sniffed {
        extension: ext,
        mime: m.to_string(),
    }))
}

/// Pixel dimensions of a raster image, reading only the header.
pub fn dimensions(path: &Path) -> Result<(u32, u32), AdapterError> {
    image::image_dimensions(path).map_err(|e| AdapterError::Image(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_png_by_signature() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.dat"); // wrong extension on purpose
        image::RgbaImage::new(4, 4)
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        let sniffed = sniff(&path).unwrap().unwrap();
        assert_eq!(sniffed.mime, "image/png");
        assert_eq!(sniffed.extension, "png");
    }

    #[test]
    fn falls_back_to_extension_for_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "plain text, no magic number").unwrap();

        let sniffed = sniff(&path).unwrap().unwrap();
        assert_eq!(sniffed.mime, "text/plain");
        assert_eq!(sniffed.extension, "txt");
    }

    #[test]
    fn empty_file_without_extension_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty");
        std::fs::write(&path, "").unwrap();

        assert_eq!(sniff(&path).unwrap(), None);
    }

    #[test]
    fn reads_only_a_bounded_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        bytes.resize(4 * SNIFF_LEN as usize, 0);
        std::fs::write(&path, &bytes).unwrap();

        let sniffed = sniff(&path).unwrap().unwrap();
        assert_eq!(sniffed.mime, "image/png");
    }

    #[test]
    fn dimensions_of_generated_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        image::RgbaImage::new(10, 20).save(&path).unwrap();

        assert_eq!(dimensions(&path).unwrap(), (10, 20));
    }

    #[test]
    fn dimensions_of_corrupt_image_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot actually a png").unwrap();

        assert!(dimensions(&path).is_err());
    }

    #[test]
    fn raster_gate() {
        assert!(is_raster("image/jpeg"));
        assert!(is_raster("image/png"));
        assert!(!is_raster("image/gif"));
        assert!(!is_raster("text/plain"));
    }
}
