//! # Tenant Core
//!
//! Domain entities, the store port, and collaborator traits for the
//! tenant data-access layer.

pub mod domain;
pub mod error;
pub mod id;
pub mod store;

// Re-export domain entities
pub use domain::{Application, Tenant};
pub use error::StoreError;
pub use id::{RandomUuidGenerator, UuidGenerator};
pub use store::TenantStore;
