//! CLI commands.
//!
//! Each command is an `Args` struct implementing [`CommandExecutor`].

mod code;
mod generate;
mod list_categories;
mod uri;

pub use code::CodeCommand;
pub use generate::GenerateCommand;
pub use list_categories::ListCategoriesCommand;
pub use uri::UriCommand;

use anyhow::Result;

use crate::config::AppConfig;

/// Runs a parsed command against the resolved configuration.
pub trait CommandExecutor {
    fn execute(&self, config: &AppConfig) -> Result<()>;
}

/// Width of the `=` rule under command headings.
pub(crate) const RULE_WIDTH: usize = 50;
