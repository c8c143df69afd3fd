//! # Tenant Data
//!
//! CQL-backed implementation of the tenant store port (adapter).

pub mod config;
pub mod scylla;
pub mod session;
pub mod statements;
pub mod store;

pub use self::config::ScyllaConfig;
pub use self::scylla::ScyllaSessionProvider;
pub use self::session::{CqlParam, CqlRow, Session, SessionProvider};
pub use self::store::TenantDataService;
