//! Generate command - render a label from fully specified inputs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hk_pairing::SetupCode;
use hk_pairing::validation::{
    normalize_mac, normalize_setup_id, validate_category, validate_output_path, validate_password,
};

use super::CommandExecutor;
use crate::config::AppConfig;
use crate::label::{LabelRequest, build_content, report_created_dir, write_label};

/// Generate a HomeKit QR code label.
///
/// All parameters are required. The output directory is created if needed.
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// HomeKit category ID (see `list-categories`)
    #[arg(short, long)]
    pub category: i64,

    /// Setup password in format XXX-XX-XXX (e.g. 482-91-573)
    #[arg(short, long)]
    pub password: String,

    /// Setup ID: 4 alphanumeric characters (0-9, A-Z)
    #[arg(short, long)]
    pub setup_id: String,

    /// MAC address: 12 hexadecimal characters
    #[arg(short, long)]
    pub mac: String,

    /// Output image file path (PNG)
    #[arg(short, long)]
    pub output: PathBuf,
}

impl CommandExecutor for GenerateCommand {
    fn execute(&self, config: &AppConfig) -> Result<()> {
        let category = validate_category(self.category).context("validation error")?;
        validate_password(&self.password).context("validation error")?;
        let setup_id = normalize_setup_id(&self.setup_id).context("validation error")?;
        let mac = normalize_mac(&self.mac).context("validation error")?;
        validate_output_path(&self.output).context("validation error")?;

        let setup_code: SetupCode = self.password.trim().parse()?;
        if setup_code.is_too_simple() {
            tracing::warn!(
                code = %setup_code,
                "Setup code is easy to guess; consider `code` to generate one"
            );
        }

        let req = LabelRequest {
            category,
            setup_code: &setup_code,
            setup_id: &setup_id,
            mac: Some(&mac),
        };
        let content = build_content(&req, &mut rand::thread_rng())?;
        let created =
            write_label(&content, &self.output, config).context("error generating label")?;
        report_created_dir(created.as_deref());

        println!("Label saved to: {}", self.output.display());
        Ok(())
    }
}
