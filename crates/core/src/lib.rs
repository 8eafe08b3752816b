//! catalog_core - Functional core of the catalog service.
//!
//! The entity persistence layer lives here: the [`entity::Entity`] contract,
//! schema inference, the storage backend trait, table provisioning and the
//! generic repository. The product model and its validation rules sit on top.

pub mod entity;
pub mod persistence;
pub mod problem;
pub mod product;
pub mod schema;
pub mod storage;
pub mod validation;
