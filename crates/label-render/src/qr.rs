//! QR code rendering for the setup URI.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};

use crate::RenderError;

/// Light modules around the symbol, in modules.
pub const QUIET_ZONE: u32 = 4;

const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const CLEAR: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Render `data` as a QR code exactly `target_px` pixels square.
///
/// Error correction level M. Dark modules are opaque black and light
/// modules transparent so the code sits on whatever is underneath.
pub fn render_qr(data: &str, target_px: u32) -> Result<RgbaImage, RenderError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;
    let side = module_count + QUIET_ZONE * 2;

    let scale = (target_px / side).max(1);
    let img_size = side * scale;

    let mut img = RgbaImage::from_pixel(img_size, img_size, CLEAR);

    for (i, color) in modules.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = (i as u32) % module_count + QUIET_ZONE;
        let y = (i as u32) / module_count + QUIET_ZONE;
        for dx in 0..scale {
            for dy in 0..scale {
                img.put_pixel(x * scale + dx, y * scale + dy, DARK);
            }
        }
    }

    if img_size == target_px {
        return Ok(img);
    }
    tracing::debug!(from = img_size, to = target_px, "Resizing QR code");
    // Nearest keeps module edges hard.
    Ok(imageops::resize(&img, target_px, target_px, FilterType::Nearest))
}
