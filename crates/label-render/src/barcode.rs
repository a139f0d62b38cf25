//! Code 39 barcode rendering.
//!
//! Each symbol is nine elements (bar, space, bar, ...), three of them wide.
//! Text is wrapped in `*` start/stop symbols and symbols are separated by a
//! narrow space.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::RenderError;

/// Wide element width in narrow modules.
pub const WIDE_RATIO: u32 = 3;

/// Modules per symbol: six narrow, three wide, plus the inter-symbol gap.
pub const MODULES_PER_SYMBOL: u32 = 6 + 3 * WIDE_RATIO + 1;

const START_STOP: char = '*';

const BAR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const SPACE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Element widths per symbol, `1` marks a wide element.
const CODE39: &[(char, &str)] = &[
    ('0', "000110100"),
    ('1', "100100001"),
    ('2', "001100001"),
    ('3', "101100000"),
    ('4', "000110001"),
    ('5', "100110000"),
    ('6', "001110000"),
    ('7', "000100101"),
    ('8', "100100100"),
    ('9', "001100100"),
    ('A', "100001001"),
    ('B', "001001001"),
    ('C', "101001000"),
    ('D', "000011001"),
    ('E', "100011000"),
    ('F', "001011000"),
    ('G', "000001101"),
    ('H', "100001100"),
    ('I', "001001100"),
    ('J', "000011100"),
    ('K', "100000011"),
    ('L', "001000011"),
    ('M', "101000010"),
    ('N', "000010011"),
    ('O', "100010010"),
    ('P', "001010010"),
    ('Q', "000000111"),
    ('R', "100000110"),
    ('S', "001000110"),
    ('T', "000010110"),
    ('U', "110000001"),
    ('V', "011000001"),
    ('W', "111000000"),
    ('X', "010010001"),
    ('Y', "110010000"),
    ('Z', "011010000"),
    ('-', "010000101"),
    ('.', "110000100"),
    (' ', "011000100"),
    ('$', "010101000"),
    ('/', "010100010"),
    ('+', "010001010"),
    ('%', "000101010"),
    ('*', "010010100"),
];

fn pattern(ch: char) -> Option<&'static str> {
    CODE39.iter().find(|&&(c, _)| c == ch).map(|&(_, p)| p)
}

/// Element widths (in modules) for `text`, including start/stop symbols.
/// Even indices are bars, odd indices spaces.
fn elements(text: &str) -> Result<Vec<u32>, RenderError> {
    if text.contains(START_STOP) {
        return Err(RenderError::UnsupportedBarcodeChar(START_STOP));
    }

    let mut out = Vec::with_capacity((text.len() + 2) * 10);
    let symbols = std::iter::once(START_STOP)
        .chain(text.chars())
        .chain(std::iter::once(START_STOP));

    for (i, ch) in symbols.enumerate() {
        if i > 0 {
            // inter-symbol gap
            out.push(1);
        }
        let p = pattern(ch).ok_or(RenderError::UnsupportedBarcodeChar(ch))?;
        out.extend(p.bytes().map(|b| if b == b'1' { WIDE_RATIO } else { 1 }));
    }
    Ok(out)
}

/// Total width in modules of `text` once encoded.
pub fn code39_modules(text: &str) -> u32 {
    (text.chars().count() as u32 + 2) * MODULES_PER_SYMBOL - 1
}

/// Render `text` as Code 39 bars `module_px` wide per narrow module and
/// `height_px` tall, on a white background.
pub fn render_code39(text: &str, module_px: u32, height_px: u32) -> Result<RgbaImage, RenderError> {
    let module_px = module_px.max(1);
    let height_px = height_px.max(1);
    let widths = elements(text)?;
    let total: u32 = widths.iter().sum();

    let mut img = RgbaImage::from_pixel(total * module_px, height_px, SPACE);
    let mut x = 0u32;
    for (i, w) in widths.iter().enumerate() {
        let w_px = w * module_px;
        if i % 2 == 0 {
            draw_filled_rect_mut(&mut img, Rect::at(x as i32, 0).of_size(w_px, height_px), BAR);
        }
        x += w_px;
    }
    Ok(img)
}
