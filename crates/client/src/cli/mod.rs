//! CLI command definitions.

pub mod health;
pub mod products;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the catalog API.
#[derive(Debug, Parser)]
#[command(name = "catalog-client")]
#[command(about = "CLI client for the catalog API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "CATALOG_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Product management.
    Products(products::ProductsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_product() {
        let cli = Cli::try_parse_from([
            "catalog-client",
            "--format",
            "json",
            "products",
            "create",
            "--name",
            "Widget",
            "--price",
            "9.99",
            "--description",
            "A widget",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Products(cmd) => match cmd.action {
                products::ProductsAction::Create {
                    name, price, stock, ..
                } => {
                    assert_eq!(name, "Widget");
                    assert_eq!(price, 9.99);
                    assert_eq!(stock, 0);
                }
                other => panic!("Expected Create, got {:?}", other),
            },
            other => panic!("Expected Products, got {:?}", other),
        }
    }

    #[test]
    fn test_get_requires_uuid() {
        let result = Cli::try_parse_from(["catalog-client", "products", "get", "p1"]);
        assert!(result.is_err());
    }
}
