//! List-categories command.

use anyhow::Result;
use clap::Args;
use hk_pairing::categories;

use super::{CommandExecutor, RULE_WIDTH};
use crate::config::AppConfig;

/// List all available HomeKit categories.
#[derive(Args, Debug)]
pub struct ListCategoriesCommand {
    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for ListCategoriesCommand {
    fn execute(&self, _config: &AppConfig) -> Result<()> {
        if self.json {
            let all: Vec<_> = categories().collect();
            println!("{}", serde_json::to_string_pretty(&all)?);
            return Ok(());
        }

        println!("Available HomeKit Categories:");
        println!("{}", "=".repeat(RULE_WIDTH));
        for c in categories() {
            println!("  {:2}: {}", c.id, c.name);
        }
        println!();
        Ok(())
    }
}
