//! Setting value validation.

use super::defaults::{BRAND, FONT, ORIGIN, SCALE};

const MAX_LINE_CHARS: usize = 80;
const FONT_EXTENSIONS: &[&str] = &[".ttf", ".otf", ".ttc"];

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        FONT => {
            let lower = value.to_lowercase();
            if !value.is_empty() && !FONT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
                return Err("must be a .ttf, .otf or .ttc file".into());
            }
        }
        SCALE => {
            let v: f32 = value.parse().map_err(|_| "must be a float")?;
            if !(1.0..=8.0).contains(&v) {
                return Err("must be between 1.0 and 8.0".into());
            }
        }
        BRAND | ORIGIN => {
            if value.chars().count() > MAX_LINE_CHARS {
                return Err(format!("must be at most {MAX_LINE_CHARS} characters"));
            }
        }
        _ => return Err(format!("unknown setting key: {key}")),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_scale() {
        assert!(validate_setting(SCALE, "2.0").is_ok());
        assert!(validate_setting(SCALE, "1.0").is_ok());
        assert!(validate_setting(SCALE, "1.5").is_ok());
        assert!(validate_setting(SCALE, "0.5").is_err());
        assert!(validate_setting(SCALE, "8").is_ok());
        assert!(validate_setting(SCALE, "0.1").is_err());
        assert!(validate_setting(SCALE, "big").is_err());
    }

    #[test]
    fn test_valid_font() {
        assert!(validate_setting(FONT, "").is_ok());
        assert!(validate_setting(FONT, "/fonts/SF-Pro-Text-Regular.OTF").is_ok());
        assert!(validate_setting(FONT, "/fonts/font.woff").is_err());
    }

    #[test]
    fn test_text_lines() {
        assert!(validate_setting(BRAND, "Acme Lighting").is_ok());
        assert!(validate_setting(ORIGIN, &"x".repeat(81)).is_err());
        assert!(validate_setting("UNKNOWN", "x").is_err());
    }
}
