//! Uri command - print the pairing URI without rendering a label.

use anyhow::{Context, Result};
use clap::Args;
use hk_pairing::encode_uri;
use hk_pairing::validation::normalize_setup_id;

use super::CommandExecutor;
use crate::config::AppConfig;

/// Print the `X-HM://` setup URI for the given values.
#[derive(Args, Debug)]
pub struct UriCommand {
    /// HomeKit category ID (0-255)
    #[arg(short, long)]
    pub category: u32,

    /// Setup password, XXX-XX-XXX or 8 plain digits
    #[arg(short, long)]
    pub password: String,

    /// Setup ID: 4 alphanumeric characters (0-9, A-Z)
    #[arg(short, long)]
    pub setup_id: String,
}

impl CommandExecutor for UriCommand {
    fn execute(&self, _config: &AppConfig) -> Result<()> {
        let setup_id = normalize_setup_id(&self.setup_id).context("invalid setup ID")?;
        let uri = encode_uri(self.category, &self.password, &setup_id)?;
        println!("{uri}");
        Ok(())
    }
}
