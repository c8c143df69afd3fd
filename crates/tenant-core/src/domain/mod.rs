//! Domain entities for the tenant data-access layer.

pub mod application;
pub mod tenant;

pub use application::Application;
pub use tenant::Tenant;
