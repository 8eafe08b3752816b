//! The generic entity persistence layer.
//!
//! Data flows caller -> [`Repository`] -> [`EntityStore`] -> `StorageBackend`.
//! [`TableProvisioner`] runs once per entity type at startup.

mod provision;
mod repository;
mod store;

pub use provision::{
    format_plan, plan_provisioning, ProvisionOutcome, ProvisionPlan, TableProvisioner,
};
pub use repository::{GenericRepository, Repository};
pub use store::EntityStore;
