//! PNG output.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::RenderError;

/// Encode a rendered label as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

/// Write `img` to `path` as PNG, creating missing parent directories.
///
/// Returns the directory that had to be created, if any.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<Option<PathBuf>, RenderError> {
    let created = match path.parent().filter(|d| !d.as_os_str().is_empty()) {
        Some(dir) if !dir.exists() => {
            std::fs::create_dir_all(dir)?;
            tracing::debug!(dir = %dir.display(), "Created output directory");
            Some(dir.to_path_buf())
        }
        _ => None,
    };
    let bytes = encode_png(img)?;
    std::fs::write(path, bytes)?;
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn encode_png_writes_signature() {
        let img = RgbaImage::new(4, 4);
        let bytes = encode_png(&img).unwrap();
        assert!(bytes.starts_with(PNG_MAGIC));
    }

    #[test]
    fn save_png_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("label-render-png-{}", std::process::id()));
        let path = dir.join("nested").join("label.png");
        let created = save_png(&RgbaImage::new(2, 2), &path).unwrap();
        assert_eq!(created, Some(dir.join("nested")));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(PNG_MAGIC));

        // Second write into the same directory creates nothing.
        assert_eq!(save_png(&RgbaImage::new(2, 2), &path).unwrap(), None);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
