//! Code command - generate a setup code (and optionally IDs) and render it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hk_pairing::identifiers::{format_mac_display, generate_mac, generate_setup_id};
use hk_pairing::validation::{
    normalize_mac, normalize_setup_id, validate_category, validate_output_path,
};
use hk_pairing::{SetupCode, SetupCodeGenerator, category_name};
use label_render::LabelContent;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::{CommandExecutor, RULE_WIDTH};
use crate::config::AppConfig;
use crate::label::{LabelRequest, build_content, report_created_dir, write_label};

/// Generate a label with an automatically generated setup code.
///
/// The setup ID and MAC address are generated too unless given.
#[derive(Args, Debug)]
pub struct CodeCommand {
    /// HomeKit category ID (see `list-categories`)
    #[arg(short, long)]
    pub category: i64,

    /// Output image file path (PNG)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Setup ID: 4 alphanumeric characters (auto-generated if omitted)
    #[arg(short, long)]
    pub setup_id: Option<String>,

    /// MAC address: 12 hexadecimal characters (auto-generated if omitted)
    #[arg(short, long)]
    pub mac: Option<String>,

    /// Print the generated values as JSON
    #[arg(long)]
    pub json: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Values printed after a successful `code` run.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedLabel {
    pub setup_code: SetupCode,
    pub setup_id: String,
    pub mac: String,
    pub category: u32,
    pub category_name: &'static str,
    pub uri: String,
    pub output: PathBuf,
}

impl GeneratedLabel {
    fn print_summary(&self) {
        println!("Generated HomeKit Setup Information:");
        println!("{}", "=".repeat(RULE_WIDTH));
        println!("  Setup Code:    {}", self.setup_code);
        println!("  Setup ID:      {}", self.setup_id);
        println!("  MAC Address:   {}", format_mac_display(&self.mac));
        println!("  Category:      {} ({})", self.category, self.category_name);
        println!("  Setup URI:     {}", self.uri);
        println!("{}", "=".repeat(RULE_WIDTH));
        println!();
    }
}

impl CodeCommand {
    /// Draw every random value for the label from `rng`: setup code, then
    /// setup ID and MAC when not given, then the printed identifiers.
    pub fn generate(
        &self,
        category: u32,
        rng: &mut StdRng,
    ) -> Result<(GeneratedLabel, LabelContent)> {
        let setup_code = SetupCodeGenerator::new(&mut *rng).generate()?;
        let setup_id = match &self.setup_id {
            Some(id) => normalize_setup_id(id).context("invalid setup ID")?,
            None => generate_setup_id(rng),
        };
        let mac = match &self.mac {
            Some(mac) => normalize_mac(mac).context("invalid MAC address")?,
            None => generate_mac(rng),
        };

        let req = LabelRequest {
            category,
            setup_code: &setup_code,
            setup_id: &setup_id,
            mac: Some(&mac),
        };
        let content = build_content(&req, rng)?;

        let generated = GeneratedLabel {
            uri: content.uri.clone(),
            setup_code,
            setup_id,
            mac,
            category,
            category_name: category_name(category).unwrap_or("Unknown"),
            output: self.output.clone(),
        };
        Ok((generated, content))
    }
}

impl CommandExecutor for CodeCommand {
    fn execute(&self, config: &AppConfig) -> Result<()> {
        let category = validate_category(self.category)?;
        validate_output_path(&self.output)?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (generated, content) = self.generate(category, &mut rng)?;

        if !self.json {
            generated.print_summary();
        }
        let created =
            write_label(&content, &self.output, config).context("error generating label")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&generated)?);
        } else {
            report_created_dir(created.as_deref());
            println!("Label saved to: {}", self.output.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hk_pairing::is_valid;

    fn command(setup_id: Option<&str>, mac: Option<&str>) -> CodeCommand {
        CodeCommand {
            category: 5,
            output: PathBuf::from("out/label.png"),
            setup_id: setup_id.map(str::to_string),
            mac: mac.map(str::to_string),
            json: false,
            seed: Some(42),
        }
    }

    #[test]
    fn same_seed_reproduces_every_value() {
        let cmd = command(None, None);
        let a = cmd.generate(5, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = cmd.generate(5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);

        let (generated, content) = a;
        assert!(is_valid(generated.setup_code.as_plain()));
        assert_eq!(generated.setup_id.len(), 4);
        assert_eq!(generated.mac.len(), 12);
        assert_eq!(generated.uri, content.uri);
        assert_eq!(content.setup_code, generated.setup_code.as_plain());
    }

    #[test]
    fn different_seeds_differ() {
        let cmd = command(None, None);
        let (a, _) = cmd.generate(5, &mut StdRng::seed_from_u64(1)).unwrap();
        let (b, _) = cmd.generate(5, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn given_setup_id_and_mac_are_normalized() {
        let cmd = command(Some(" hspn "), Some("30aea40506a0"));
        let (generated, content) = cmd.generate(5, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(generated.setup_id, "HSPN");
        assert_eq!(generated.mac, "30AEA40506A0");
        assert!(content.uri.ends_with("HSPN"));
        assert_eq!(content.mac.as_deref(), Some("30AEA40506A0"));
    }

    #[test]
    fn json_uses_dashed_setup_code() {
        let generated = GeneratedLabel {
            setup_code: "61380755".parse().unwrap(),
            setup_id: "HSPN".into(),
            mac: "30AEA40506A0".into(),
            category: 5,
            category_name: "Light",
            uri: "X-HM://0053158R7HSPN".into(),
            output: PathBuf::from("label.png"),
        };
        let value = serde_json::to_value(&generated).unwrap();
        assert_eq!(value["setup_code"], "613-80-755");
        assert_eq!(value["category"], 5);
        assert_eq!(value["uri"], "X-HM://0053158R7HSPN");
    }
}
