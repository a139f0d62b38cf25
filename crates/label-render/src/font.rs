//! Font discovery for label text.
//!
//! Lookup order: an explicitly configured file, then the user's font
//! directory, then well-known system locations.

use std::path::{Path, PathBuf};

use ab_glyph::FontRef;

const VALID_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// File names tried inside the user font directory.
const USER_FONT_NAMES: &[&str] = &[
    "SF-Pro-Text-Regular.otf",
    "DejaVuSans.ttf",
    "LiberationSans-Regular.ttf",
    "Arial.ttf",
];

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Invalid font format (only TTF/OTF/TTC supported): {}", .0.display())]
    InvalidFormat(PathBuf),
    #[error("Failed to parse font data from {}", .0.display())]
    Parse(PathBuf),
    #[error("No usable font found (searched: {})", format_paths(.0))]
    NotFound(Vec<PathBuf>),
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Font bytes read from disk, already checked to parse.
#[derive(Clone)]
pub struct LoadedFont {
    path: PathBuf,
    data: Vec<u8>,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("path", &self.path)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl LoadedFont {
    /// Wrap raw font bytes; `path` is only used for messages.
    pub fn from_bytes(path: impl Into<PathBuf>, data: Vec<u8>) -> Result<Self, FontError> {
        let path = path.into();
        FontRef::try_from_slice(&data).map_err(|_| FontError::Parse(path.clone()))?;
        Ok(Self { path, data })
    }

    pub fn read(path: &Path) -> Result<Self, FontError> {
        if !has_font_extension(path) {
            return Err(FontError::InvalidFormat(path.to_path_buf()));
        }
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, data)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Borrow the parsed font.
    pub fn font(&self) -> Result<FontRef<'_>, FontError> {
        FontRef::try_from_slice(&self.data).map_err(|_| FontError::Parse(self.path.clone()))
    }
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| VALID_EXTENSIONS.iter().any(|v| e.eq_ignore_ascii_case(v)))
}

/// Load the label font.
///
/// An explicit path must load; it is never silently replaced by a fallback.
pub fn load_font(explicit: Option<&Path>) -> Result<LoadedFont, FontError> {
    if let Some(path) = explicit {
        let font = LoadedFont::read(path)?;
        tracing::debug!(path = %path.display(), "Using configured font");
        return Ok(font);
    }

    let candidates = fallback_candidates();
    for path in &candidates {
        match LoadedFont::read(path) {
            Ok(font) => {
                tracing::info!(path = %path.display(), "Using system font for label text");
                return Ok(font);
            }
            Err(FontError::Io { .. }) => continue,
            Err(e) => tracing::debug!("Skipping font candidate: {e}"),
        }
    }
    Err(FontError::NotFound(candidates))
}

fn fallback_candidates() -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(dir) = dirs::font_dir() {
        out.extend(USER_FONT_NAMES.iter().map(|name| dir.join(name)));
    }
    out.extend(system_font_candidates().iter().map(PathBuf::from));
    out
}

fn system_font_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        &[
            "/System/Library/Fonts/SFNS.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/System/Library/Fonts/Helvetica.ttc",
        ]
    }
    #[cfg(target_os = "windows")]
    {
        &[
            "C:\\Windows\\Fonts\\segoeui.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/opentype/noto/NotoSans-Regular.ttf",
        ]
    }
}
