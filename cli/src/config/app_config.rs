//! Runtime label configuration resolved from the settings store.

use std::path::PathBuf;

use label_render::LabelStyle;

use super::defaults::{BRAND, FONT, ORIGIN, SCALE};
use super::manager::SettingsManager;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Explicit font file; `None` searches system fonts.
    pub font_path: Option<PathBuf>,
    pub scale: f32,
    pub brand: String,
    pub origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let style = LabelStyle::default();
        Self {
            font_path: None,
            scale: style.scale,
            brand: style.brand,
            origin: style.origin,
        }
    }
}

impl AppConfig {
    pub fn load(sm: &SettingsManager) -> Result<Self, anyhow::Error> {
        let defaults = Self::default();
        let font = sm.get_setting(FONT)?;
        Ok(Self {
            font_path: (!font.is_empty()).then(|| PathBuf::from(font)),
            scale: parse_f32(&sm.get_setting(SCALE)?, defaults.scale),
            brand: sm.get_setting(BRAND)?,
            origin: sm.get_setting(ORIGIN)?,
        })
    }

    pub fn style(&self) -> LabelStyle {
        LabelStyle {
            scale: self.scale,
            brand: self.brand.clone(),
            origin: self.origin.clone(),
        }
    }
}

fn parse_f32(s: &str, default: f32) -> f32 {
    s.parse().unwrap_or(default)
}
