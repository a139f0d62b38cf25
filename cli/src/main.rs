//! homekit-label - generate HomeKit setup labels.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use homekit_label_lib::commands::{
    CodeCommand, CommandExecutor, GenerateCommand, ListCategoriesCommand, UriCommand,
};
use homekit_label_lib::{init_config, init_tracing};

/// Generate HomeKit QR code labels with device information.
///
/// Examples:
///   homekit-label generate -c 5 -p 482-91-573 -s HSPN -m 30AEA40506A0 -o label.png
///   homekit-label code -c 5 -o out/label.png
///   homekit-label list-categories
#[derive(Parser)]
#[command(name = "homekit-label")]
#[command(version)]
#[command(about = "Generate HomeKit QR code labels")]
struct Cli {
    /// Font file for label text (overrides HOMEKIT_LABEL_FONT)
    #[arg(long, global = true)]
    font: Option<PathBuf>,

    /// Pixels per layout unit, 1.0-8.0 (overrides HOMEKIT_LABEL_SCALE)
    #[arg(long, global = true)]
    scale: Option<f32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a label from a given setup code, setup ID and MAC
    Generate(GenerateCommand),

    /// Generate a label with an auto-generated setup code
    Code(CodeCommand),

    /// List all available HomeKit categories
    ListCategories(ListCategoriesCommand),

    /// Print the X-HM:// setup URI
    Uri(UriCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Generate(cmd) => cmd,
            Commands::Code(cmd) => cmd,
            Commands::ListCategories(cmd) => cmd,
            Commands::Uri(cmd) => cmd,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = init_config(cli.font.as_deref(), cli.scale)?;
    cli.command.executor().execute(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "homekit-label",
            "code",
            "-c",
            "5",
            "-o",
            "label.png",
            "--scale",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.scale, Some(3.0));
        assert!(matches!(cli.command, Commands::Code(ref c) if c.category == 5 && c.seed.is_none()));
    }

    #[test]
    fn generate_requires_every_field() {
        assert!(Cli::try_parse_from(["homekit-label", "generate", "-c", "5", "-o", "x.png"]).is_err());
    }
}
