//! Table provisioning.
//!
//! Planning is pure ([`plan_provisioning`], [`format_plan`]); applying a plan
//! is the only step that talks to the backend.

use std::sync::Arc;

use crate::entity::Entity;
use crate::schema::{Schema, SchemaRegistry};
use crate::storage::{BackendError, BillingMode, CreateTableRequest, Result, StorageBackend};

/// What needs to happen for a table to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionPlan {
    /// Table is missing and will be created.
    CreateTable { request: CreateTableRequest },
    /// Table is already there, nothing to do.
    AlreadyExists { table_name: String },
}

impl ProvisionPlan {
    pub fn table_name(&self) -> &str {
        match self {
            ProvisionPlan::CreateTable { request } => &request.table_name,
            ProvisionPlan::AlreadyExists { table_name } => table_name,
        }
    }
}

/// Result of applying a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    AlreadyExisted,
}

/// Pure function: decide whether the schema's table must be created.
pub fn plan_provisioning(
    existing_tables: &[String],
    schema: &Schema,
    billing_mode: BillingMode,
) -> ProvisionPlan {
    if existing_tables.iter().any(|t| *t == schema.table_name) {
        ProvisionPlan::AlreadyExists {
            table_name: schema.table_name.clone(),
        }
    } else {
        ProvisionPlan::CreateTable {
            request: CreateTableRequest::from_schema(schema, billing_mode),
        }
    }
}

/// Pure function: format a plan for display.
pub fn format_plan(plan: &ProvisionPlan) -> Vec<String> {
    match plan {
        ProvisionPlan::CreateTable { request } => {
            let mut lines = vec![
                format!("+ Create table: {}", request.table_name),
                format!(
                    "  Partition key: {} ({})",
                    request.key.name, request.key.scalar_type
                ),
            ];
            for definition in request
                .attribute_definitions
                .iter()
                .filter(|d| d.name != request.key.name)
            {
                lines.push(format!(
                    "  Attribute: {} ({})",
                    definition.name, definition.scalar_type
                ));
            }
            lines.push(match request.billing_mode {
                BillingMode::PayPerRequest => "  Billing: PAY_PER_REQUEST".to_string(),
                BillingMode::Provisioned {
                    read_capacity,
                    write_capacity,
                } => format!(
                    "  Billing: PROVISIONED (read: {}, write: {})",
                    read_capacity, write_capacity
                ),
            });
            lines
        }
        ProvisionPlan::AlreadyExists { table_name } => {
            vec![format!("= Table '{}' already exists", table_name)]
        }
    }
}

/// Ensures entity tables exist before they are used.
pub struct TableProvisioner<B: StorageBackend + ?Sized> {
    backend: Arc<B>,
    registry: SchemaRegistry,
    billing_mode: BillingMode,
}

impl<B: StorageBackend + ?Sized> Clone for TableProvisioner<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            registry: self.registry.clone(),
            billing_mode: self.billing_mode,
        }
    }
}

impl<B: StorageBackend + ?Sized> TableProvisioner<B> {
    pub fn new(backend: Arc<B>, registry: SchemaRegistry) -> Self {
        Self {
            backend,
            registry,
            billing_mode: BillingMode::default(),
        }
    }

    pub fn with_billing_mode(mut self, billing_mode: BillingMode) -> Self {
        self.billing_mode = billing_mode;
        self
    }

    /// Ensures the table for `T` exists, creating it when absent.
    pub async fn ensure_table<T: Entity>(&self) -> Result<ProvisionOutcome> {
        let schema = self.registry.schema::<T>()?;
        self.ensure_schema(&schema).await
    }

    /// Ensures the table described by `schema` exists.
    pub async fn ensure_schema(&self, schema: &Schema) -> Result<ProvisionOutcome> {
        let plan = self.plan_schema(schema).await?;
        self.apply(&plan).await
    }

    /// Computes the plan for `T` against the backend's current tables.
    pub async fn plan<T: Entity>(&self) -> Result<ProvisionPlan> {
        let schema = self.registry.schema::<T>()?;
        self.plan_schema(&schema).await
    }

    async fn plan_schema(&self, schema: &Schema) -> Result<ProvisionPlan> {
        let existing = self.backend.list_tables().await?;
        Ok(plan_provisioning(&existing, schema, self.billing_mode))
    }

    /// Applies a plan. A concurrent creator winning the race counts as success.
    pub async fn apply(&self, plan: &ProvisionPlan) -> Result<ProvisionOutcome> {
        match plan {
            ProvisionPlan::AlreadyExists { table_name } => {
                tracing::debug!(table = %table_name, "Table already exists");
                Ok(ProvisionOutcome::AlreadyExisted)
            }
            ProvisionPlan::CreateTable { request } => {
                match self.backend.create_table(request).await {
                    Ok(()) => {
                        tracing::info!(table = %request.table_name, "Created table");
                        Ok(ProvisionOutcome::Created)
                    }
                    Err(BackendError::TableAlreadyExists(table_name)) => {
                        tracing::debug!(
                            table = %table_name,
                            "Table was created concurrently"
                        );
                        Ok(ProvisionOutcome::AlreadyExisted)
                    }
                    Err(e) => {
                        tracing::error!(
                            table = %request.table_name,
                            error = %e,
                            "Failed to create table"
                        );
                        Err(e.into())
                    }
                }
            }
        }
    }
}
