//! Shared pipeline that turns validated inputs into a label PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hk_pairing::identifiers::{generate_csn, generate_device_code, generate_serial};
use hk_pairing::{SetupCode, category_name, encode_uri};
use label_render::{LabelContent, load_font, render_label, save_png};
use rand::Rng;

use crate::config::AppConfig;

/// Validated inputs for one label.
#[derive(Debug, Clone)]
pub struct LabelRequest<'a> {
    pub category: u32,
    pub setup_code: &'a SetupCode,
    /// Normalized, 4 characters.
    pub setup_id: &'a str,
    /// Normalized, 12 hex characters.
    pub mac: Option<&'a str>,
}

/// Build the label content: pairing URI plus fresh printed identifiers.
pub fn build_content<R: Rng + ?Sized>(req: &LabelRequest<'_>, rng: &mut R) -> Result<LabelContent> {
    let uri = encode_uri(req.category, req.setup_code.as_plain(), req.setup_id)?;
    Ok(LabelContent {
        category_name: category_name(req.category).unwrap_or("Unknown").to_string(),
        device_code: generate_device_code(req.category, rng),
        serial: generate_serial(rng),
        csn: generate_csn(rng),
        setup_code: req.setup_code.as_plain().to_string(),
        uri,
        mac: req.mac.map(str::to_string),
    })
}

/// Render `content` and write it to `output`.
///
/// Returns the output directory if it had to be created.
pub fn write_label(
    content: &LabelContent,
    output: &Path,
    config: &AppConfig,
) -> Result<Option<PathBuf>> {
    let font = load_font(config.font_path.as_deref()).context("Failed to load label font")?;
    let img = render_label(content, &font.font()?, &config.style())
        .context("Failed to render label")?;
    let created = save_png(&img, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        output = %output.display(),
        font = %font.path().display(),
        uri = %content.uri,
        "Label written"
    );
    Ok(created)
}

/// Tell the user about a freshly created output directory.
pub fn report_created_dir(created: Option<&Path>) {
    if let Some(dir) = created {
        println!("Created output directory: {}", dir.display());
    }
}
