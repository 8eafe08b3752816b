//! DynamoDB infrastructure management commands.

mod error;
mod planning;

pub use error::{DynamodbError, Result};

use std::sync::Arc;

use catalog_core::entity::Entity;
use catalog_core::persistence::{
    format_plan, EntityStore, ProvisionPlan, Repository, TableProvisioner,
};
use catalog_core::product::{generate_seed_products, Product, ProductRepository};
use catalog_core::schema::SchemaRegistry;
use catalog_core::storage::{BillingMode, StorageBackend};
use catalog_dynamodb::{AwsConfig, DynamoDbBackend};
use dialoguer::Confirm;

use crate::prelude::*;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the product table.
    Deploy(DeployCommand),

    /// Seed the product table with demo products.
    Seed(SeedCommand),
}

/// Deploy or destroy DynamoDB infrastructure.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy DynamoDB table infrastructure.

By default, this command creates the product table from the registered
entity schema if it does not exist yet. Tables are never altered.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Provisioned read capacity. Requires --write-capacity.
    #[arg(long)]
    pub read_capacity: Option<i64>,

    /// Provisioned write capacity. Requires --read-capacity.
    #[arg(long)]
    pub write_capacity: Option<i64>,
}

impl DeployCommand {
    fn billing_mode(&self) -> Result<BillingMode> {
        match (self.read_capacity, self.write_capacity) {
            (None, None) => Ok(BillingMode::PayPerRequest),
            (Some(read_capacity), Some(write_capacity)) => Ok(BillingMode::Provisioned {
                read_capacity,
                write_capacity,
            }),
            _ => Err(DynamodbError::IncompleteCapacity),
        }
    }
}

/// Seed the product table with demo products.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert demo products into DynamoDB.

Products go through the product repository, so every generated product is
validated before it is written.")]
pub struct SeedCommand {
    /// Number of products to generate.
    #[arg(long, default_value = "20")]
    pub count: u32,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) if deploy_cmd.destroy => {
            run_destroy(deploy_cmd, &global).await
        }
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

fn confirm(prompt: impl Into<String>, default: bool) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn connect(global: &crate::Global) -> Arc<DynamoDbBackend> {
    let aws_config = AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    Arc::new(DynamoDbBackend::from_config(&aws_config).await)
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let billing_mode = cmd.billing_mode()?;
    let backend = connect(global).await;

    let provisioner =
        TableProvisioner::new(backend, SchemaRegistry::new()).with_billing_mode(billing_mode);
    let plan = provisioner.plan::<Product>().await?;

    if !global.is_silent() {
        aprintln!("{}", p_c("Deploy Plan:"));
        for line in format_plan(&plan) {
            aprintln!("  {}", paint_plan_line(&line));
        }
        aprintln!();
    }

    if matches!(plan, ProvisionPlan::AlreadyExists { .. }) {
        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure is up to date."));
        }
        return Ok(());
    }

    if !cmd.force {
        confirm("Apply these changes?", true)?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Applying changes..."));
    }

    provisioner.apply(&plan).await?;

    if !global.is_silent() {
        aprintln!("{}", p_g("Infrastructure deployed successfully."));
    }

    Ok(())
}

async fn run_destroy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let backend = connect(global).await;

    let existing = backend.list_tables().await?;
    let plan = planning::calculate_destroy_plan(&existing, Product::TABLE_NAME);

    if !global.is_silent() {
        aprintln!("{}", p_y("Destroy Plan:"));
        for line in planning::format_destroy_plan(&plan) {
            aprintln!("  {}", p_r(&line));
        }
        aprintln!();
    }

    let planning::DestroyPlan::DeleteTable { table_name } = plan else {
        if !global.is_silent() {
            aprintln!("{}", p_g("Nothing to destroy."));
        }
        return Ok(());
    };

    if !cmd.force {
        confirm(
            "Are you sure you want to delete this table? ALL DATA WILL BE LOST",
            false,
        )?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Deleting table..."));
    }

    backend.delete_table(&table_name).await?;

    if !global.is_silent() {
        aprintln!("{}", p_g("Table destroyed successfully."));
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let backend = connect(global).await;

    let existing = backend.list_tables().await?;
    if !existing.iter().any(|t| t == Product::TABLE_NAME) {
        return Err(DynamodbError::TableNotFound {
            table_name: Product::TABLE_NAME.to_string(),
        });
    }

    let products = generate_seed_products(cmd.count);

    if !global.is_silent() {
        aprintln!("{}", p_c("Products to create:"));
        for product in products.iter().take(5) {
            aprintln!(
                "  {} (${:.2}, {} in stock)",
                product.name,
                product.price,
                product.stock
            );
        }
        if products.len() > 5 {
            aprintln!("  ... and {} more", products.len() - 5);
        }
        aprintln!();
    }

    if !cmd.force {
        confirm(format!("Insert {} products?", products.len()), true)?;
    }

    let repository = ProductRepository::new(EntityStore::new(backend, SchemaRegistry::new()));
    for product in &products {
        repository.add(product).await?;
    }

    if !global.is_silent() {
        aprintln!("{} {} products inserted.", p_g("Success:"), products.len());
    }

    Ok(())
}
