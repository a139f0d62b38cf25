//! Image composition: place rendered parts onto the label canvas.

use image::{Rgba, RgbaImage};

/// Overlay `top` onto `base` with its top-left corner at (`x`, `y`).
///
/// `top` is alpha-composited over the base; pixels falling outside the
/// base are clipped.
pub fn overlay(base: &mut RgbaImage, top: &RgbaImage, x: i64, y: i64) {
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x + i64::from(dx);
        let target_y = y + i64::from(dy);
        if target_x < 0
            || target_y < 0
            || target_x >= i64::from(base.width())
            || target_y >= i64::from(base.height())
        {
            continue;
        }
        let (tx, ty) = (target_x as u32, target_y as u32);

        let alpha = pixel[3] as f32 / 255.0;
        if alpha > 0.99 {
            base.put_pixel(tx, ty, *pixel);
        } else if alpha > 0.01 {
            let bg = base.get_pixel(tx, ty);
            let blended = blend_pixel(bg, pixel, alpha);
            base.put_pixel(tx, ty, blended);
        }
    }
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (fg[0] as f32 * alpha + bg[0] as f32 * inv) as u8,
        (fg[1] as f32 * alpha + bg[1] as f32 * inv) as u8,
        (fg[2] as f32 * alpha + bg[2] as f32 * inv) as u8,
        255,
    ])
}
