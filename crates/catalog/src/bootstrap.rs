//! Startup steps that run before the listener binds.

use std::sync::Arc;

use catalog_core::persistence::{ProvisionOutcome, Repository, TableProvisioner};
use catalog_core::product::{generate_seed_products, Product};
use catalog_core::schema::SchemaRegistry;
use catalog_core::storage::{BillingMode, Result, StorageBackend};

/// Registers every entity schema and makes sure its table exists.
///
/// Fails on a broken entity declaration or any backend error other than a
/// concurrent create.
pub async fn provision_tables(
    backend: Arc<dyn StorageBackend>,
    registry: &SchemaRegistry,
    billing_mode: BillingMode,
) -> Result<ProvisionOutcome> {
    registry.register::<Product>()?;

    let provisioner =
        TableProvisioner::new(backend, registry.clone()).with_billing_mode(billing_mode);
    let outcome = provisioner.ensure_table::<Product>().await?;

    tracing::info!(
        tables = ?registry.table_names(),
        outcome = ?outcome,
        "Provisioned tables"
    );
    Ok(outcome)
}

/// Inserts `count` generated products.
pub async fn seed_products(products: &dyn Repository<Product>, count: u32) -> Result<usize> {
    let seed = generate_seed_products(count);
    for product in &seed {
        products.add(product).await?;
    }
    tracing::info!(count = seed.len(), "Seeded demo products");
    Ok(seed.len())
}
