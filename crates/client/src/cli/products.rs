//! Product CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Product management commands.
#[derive(Debug, Parser)]
pub struct ProductsCommand {
    #[command(subcommand)]
    pub action: ProductsAction,
}

/// Available product actions.
#[derive(Debug, Subcommand)]
pub enum ProductsAction {
    /// List all products.
    List,
    /// Create a new product.
    Create {
        /// Product name.
        #[arg(long)]
        name: String,
        /// Unit price.
        #[arg(long)]
        price: f64,
        /// Product description.
        #[arg(long)]
        description: String,
        /// Units in stock.
        #[arg(long, default_value_t = 0)]
        stock: i64,
    },
    /// Get product by ID.
    Get {
        /// Product ID.
        id: Uuid,
    },
    /// Update a product. Omitted fields keep their current value.
    Update {
        /// Product ID.
        id: Uuid,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New price.
        #[arg(long)]
        price: Option<f64>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New stock level.
        #[arg(long)]
        stock: Option<i64>,
    },
    /// Delete product by ID.
    Delete {
        /// Product ID.
        id: Uuid,
    },
}
