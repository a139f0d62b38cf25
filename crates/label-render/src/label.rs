//! Label layout.
//!
//! Layout (base units, 842 x 250, scaled by [`LabelStyle::scale`]):
//! ```text
//! +--------+  HomeKit {category} | {device} | WIFI
//! |1 2 3 4 |  {brand}®
//! |5 6 7 8 |  {origin}
//! +--------+  (1P){device}             MAC: AA:BB:CC:DD:EE:FF
//! +--------+  ||||||||||||             ||||||||||||||||
//! |        |  (S) Serial No. {serial}
//! |  QR    |  ||||||||||||||
//! |        |  CSN {csn}
//! +--------+  ||||||||||||||||||||||||||||||
//! ```

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use hk_pairing::identifiers::format_mac_display;
use image::RgbaImage;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::barcode::{code39_modules, render_code39};
use crate::compose::overlay;
use crate::qr::render_qr;
use crate::text::{self, BLACK};
use crate::{BASE_HEIGHT, BASE_WIDTH, RenderError};

const TEXT_FONT_SIZE: f32 = 18.0;
const CODE_FONT_SIZE: f32 = 28.0;
const SUPERSCRIPT_FONT_SIZE: f32 = 8.0;

/// Left edge of the text column.
const COLUMN_X: f32 = 200.0;
/// Left edge of the MAC block.
const MAC_X: f32 = 560.0;
const START_Y: f32 = 6.0;
const SPACING_TOP: f32 = 20.0;
const SPACING_BODY: f32 = 18.0;
const SPACING_EXTRA: f32 = 6.0;
const BARCODE_SPACING: f32 = 30.0;
const BARCODE_HEIGHT: f32 = 24.0;

/// Setup code box: digit grid origin, pitch and row offsets.
const CODE_X: f32 = 76.0;
const CODE_PITCH: f32 = 20.0;
const CODE_ROWS_Y: [f32; 2] = [12.0, 39.0];
const CODE_BOX: (f32, f32, f32, f32) = (68.0, 4.0, 92.0, 68.0);

/// QR code square.
const QR_X: f32 = 19.0;
const QR_Y: f32 = 77.0;
const QR_SIZE: f32 = 136.0;

/// Everything printed on one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelContent {
    pub category_name: String,
    pub device_code: String,
    pub serial: String,
    pub csn: String,
    /// Setup code digits; dashes are ignored.
    pub setup_code: String,
    /// Text encoded into the QR code.
    pub uri: String,
    /// Uppercase hex without separators; the MAC block is skipped when `None`.
    pub mac: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LabelStyle {
    /// Pixels per base unit.
    pub scale: f32,
    pub brand: String,
    pub origin: String,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            scale: 2.0,
            brand: "Designed by StudioPeters".into(),
            origin: "Assembled in the Netherlands".into(),
        }
    }
}

/// Maps base-unit coordinates to pixels.
struct Canvas {
    img: RgbaImage,
    scale: f32,
}

impl Canvas {
    fn px(&self, v: f32) -> i32 {
        (v * self.scale) as i32
    }

    fn font_scale(&self, size: f32) -> PxScale {
        PxScale::from(size * self.scale)
    }

    fn text(&mut self, font: &FontRef<'_>, size: f32, x: f32, y: f32, s: &str) {
        let scale = self.font_scale(size);
        let (x, y) = (self.px(x), self.px(y));
        text::draw_text(&mut self.img, font, scale, x, y, s);
    }

    fn barcode(&mut self, x: f32, y: f32, s: &str) -> Result<(), RenderError> {
        let (x, y) = (self.px(x), self.px(y));
        let module_px = barcode_module_px(self.scale, self.img.width(), x, s)?;
        let height_px = (BARCODE_HEIGHT * self.scale).round() as u32;
        let bars = render_code39(s, module_px, height_px)?;
        overlay(&mut self.img, &bars, i64::from(x), i64::from(y));
        Ok(())
    }
}

/// Narrow module width for a barcode starting at `x_px`: `floor(scale)`,
/// narrowed further so the whole symbol ends inside the canvas.
fn barcode_module_px(
    scale: f32,
    canvas_w: u32,
    x_px: i32,
    text: &str,
) -> Result<u32, RenderError> {
    let modules = code39_modules(text);
    let available = canvas_w.saturating_sub(x_px.max(0) as u32);
    let fit = available / modules;
    if fit == 0 {
        return Err(RenderError::BarcodeOverflow {
            text: text.to_string(),
            needed: modules,
            available,
        });
    }
    Ok((scale.floor() as u32).clamp(1, fit))
}

/// Draw a complete label.
pub fn render_label(
    content: &LabelContent,
    font: &FontRef<'_>,
    style: &LabelStyle,
) -> Result<RgbaImage, RenderError> {
    if !style.scale.is_finite() || style.scale <= 0.0 {
        return Err(RenderError::InvalidScale(style.scale));
    }

    let width = (BASE_WIDTH * style.scale).round() as u32;
    let height = (BASE_HEIGHT * style.scale).round() as u32;
    let mut canvas = Canvas {
        img: text::blank_image(width, height),
        scale: style.scale,
    };
    tracing::debug!(width, height, scale = style.scale, "Rendering label");

    draw_setup_code(&mut canvas, font, &content.setup_code);

    let qr_px = (QR_SIZE * style.scale).round() as u32;
    let qr = render_qr(&content.uri, qr_px)?;
    let (qr_x, qr_y) = (canvas.px(QR_X), canvas.px(QR_Y));
    overlay(&mut canvas.img, &qr, i64::from(qr_x), i64::from(qr_y));

    let mut y = START_Y;
    let header = format!(
        "HomeKit {} | {} | WIFI",
        content.category_name, content.device_code
    );
    canvas.text(font, TEXT_FONT_SIZE, COLUMN_X, y, &header);
    y += SPACING_TOP;

    canvas.text(font, TEXT_FONT_SIZE, COLUMN_X, y, &style.brand);
    let brand_width =
        text::measure_text_width(font, canvas.font_scale(TEXT_FONT_SIZE), &style.brand);
    let sup_x = COLUMN_X + brand_width as f32 / style.scale;
    canvas.text(font, SUPERSCRIPT_FONT_SIZE, sup_x, y + 3.0, "\u{00AE}");
    y += SPACING_TOP;

    canvas.text(font, TEXT_FONT_SIZE, COLUMN_X, y, &style.origin);
    y += SPACING_TOP;

    canvas.text(
        font,
        TEXT_FONT_SIZE,
        COLUMN_X,
        y,
        &format!("(1P){}", content.device_code),
    );
    if let Some(mac) = &content.mac {
        let display = format_mac_display(mac);
        canvas.text(font, TEXT_FONT_SIZE, MAC_X, y, &format!("MAC: {display}"));
        canvas.barcode(MAC_X, y + SPACING_BODY + SPACING_EXTRA, &mac.to_uppercase())?;
    }
    y += SPACING_BODY + SPACING_EXTRA;

    canvas.barcode(COLUMN_X, y, &content.device_code)?;
    y += BARCODE_SPACING;

    canvas.text(
        font,
        TEXT_FONT_SIZE,
        COLUMN_X,
        y,
        &format!("(S) Serial No. {}", content.serial),
    );
    y += SPACING_BODY + SPACING_EXTRA;
    canvas.barcode(COLUMN_X, y, &content.serial)?;
    y += BARCODE_SPACING;

    canvas.text(
        font,
        TEXT_FONT_SIZE,
        COLUMN_X,
        y,
        &format!("CSN {}", content.csn),
    );
    y += SPACING_BODY + SPACING_EXTRA;
    canvas.barcode(COLUMN_X, y, &content.csn)?;

    Ok(canvas.img)
}

/// Frame plus the eight digits in two rows of four.
fn draw_setup_code(canvas: &mut Canvas, font: &FontRef<'_>, setup_code: &str) {
    let (bx, by, bw, bh) = CODE_BOX;
    let rect = Rect::at(canvas.px(bx), canvas.px(by)).of_size(
        ((bw * canvas.scale) as u32).max(1),
        ((bh * canvas.scale) as u32).max(1),
    );
    draw_hollow_rect_mut(&mut canvas.img, rect, BLACK);

    let digits: Vec<char> = setup_code.chars().filter(|c| *c != '-').collect();
    let scale = canvas.font_scale(CODE_FONT_SIZE);
    let pitch = CODE_PITCH * canvas.scale;
    for (row, row_y) in CODE_ROWS_Y.iter().enumerate() {
        for col in 0..4 {
            let Some(ch) = digits.get(row * 4 + col) else {
                continue;
            };
            // Centre each digit in its cell.
            let advance = font.as_scaled(scale).h_advance(font.glyph_id(*ch));
            let x =
                CODE_X * canvas.scale + col as f32 * pitch + ((pitch - advance) / 2.0).max(0.0);
            let y = canvas.px(*row_y);
            text::draw_text(&mut canvas.img, font, scale, x as i32, y, &ch.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_scale_is_positive() {
        assert!(LabelStyle::default().scale > 0.0);
    }

    /// Right edge of the widest barcode at each start column, in pixels.
    fn barcode_end(scale: f32, x: f32, text: &str) -> (u32, u32) {
        let canvas_w = (BASE_WIDTH * scale).round() as u32;
        let x_px = (x * scale) as i32;
        let module_px = barcode_module_px(scale, canvas_w, x_px, text).unwrap();
        (x_px as u32 + code39_modules(text) * module_px, canvas_w)
    }

    #[test]
    fn barcodes_end_inside_canvas_at_fractional_scales() {
        let csn = "12345678901234567890ABC1234A1B123";
        let mac = "30AEA40506A0";
        for scale in [1.0, 1.5, 2.0, 2.5, 3.5, 8.0] {
            for (x, text) in [(COLUMN_X, csn), (MAC_X, mac), (COLUMN_X, "AB32CD1EF/G")] {
                let (end, canvas_w) = barcode_end(scale, x, text);
                assert!(end <= canvas_w, "scale {scale}: {text} ends at {end} of {canvas_w}");
            }
        }
    }

    #[test]
    fn module_width_follows_whole_scale() {
        assert_eq!(barcode_module_px(2.5, 2105, 500, "30AEA40506A0").unwrap(), 2);
        assert_eq!(barcode_module_px(1.5, 1263, 840, "30AEA40506A0").unwrap(), 1);
        assert_eq!(barcode_module_px(0.5, 421, 0, "A").unwrap(), 1);
    }

    #[test]
    fn barcode_that_cannot_fit_is_an_error() {
        let csn = "12345678901234567890ABC1234A1B123";
        let err = barcode_module_px(0.5, 421, 100, csn).unwrap_err();
        assert!(matches!(
            err,
            RenderError::BarcodeOverflow {
                needed: 559,
                available: 321,
                ..
            }
        ));
    }
}
