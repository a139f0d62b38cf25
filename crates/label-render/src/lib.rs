//! Raster rendering of HomeKit setup labels.
//!
//! Draws the setup code box, the `X-HM://` QR code, Code 39 barcodes and
//! the identifying text onto an RGBA canvas and encodes it as PNG.

pub mod barcode;
pub mod compose;
pub mod font;
pub mod label;
pub mod png;
pub mod qr;
pub mod text;

// Re-exports for convenience
pub use font::{FontError, LoadedFont, load_font};
pub use label::{LabelContent, LabelStyle, render_label};
pub use png::{encode_png, save_png};

/// Width of the label layout in base units; every coordinate is scaled.
pub const BASE_WIDTH: f32 = 842.0;

/// Height of the label layout in base units.
pub const BASE_HEIGHT: f32 = 250.0;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("QR encode error: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("character '{0}' cannot be encoded in Code 39")]
    UnsupportedBarcodeChar(char),

    #[error("barcode '{text}' needs {needed}px but only {available}px remain on the label")]
    BarcodeOverflow {
        text: String,
        needed: u32,
        available: u32,
    },

    #[error("invalid label scale {0} (must be finite and positive)")]
    InvalidScale(f32),

    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Font(#[from] FontError),
}
