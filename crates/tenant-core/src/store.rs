//! Tenant store trait (port)

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Application, Tenant};
use crate::error::StoreError;

/// Data-access contract for tenants and their applications, consumed
/// by the upstream service layer.
///
/// Every operation is independently synchronous with respect to the
/// caller and stateless with respect to other calls. Races on the
/// same key are not serialized here; the storage engine's
/// last-write-wins semantics apply.
#[async_trait]
pub trait TenantStore: Send + Sync {
    /// Creates a new tenant and returns its generated identifier.
    async fn create_tenant(&self, tenant: &Tenant) -> Result<Uuid, StoreError>;

    /// Overwrites an existing tenant. Fails with
    /// [`StoreError::TenantNotFound`] if no row exists for the
    /// identifier.
    async fn update_tenant(&self, tenant_id: Uuid, tenant: &Tenant) -> Result<(), StoreError>;

    /// Retrieves an existing tenant by identifier.
    async fn read_tenant(&self, tenant_id: Uuid) -> Result<Tenant, StoreError>;

    /// Deletes an existing tenant. Rows of dependent applications are
    /// left untouched; removing them is the caller's concern.
    async fn delete_tenant(&self, tenant_id: Uuid) -> Result<(), StoreError>;

    /// Creates a new application under an existing tenant and returns
    /// the generated application identifier.
    async fn create_application(
        &self,
        tenant_id: Uuid,
        application: &Application,
    ) -> Result<Uuid, StoreError>;

    /// Overwrites an existing application. The tenant existence check
    /// fires before the application one.
    async fn update_application(
        &self,
        tenant_id: Uuid,
        application_id: Uuid,
        application: &Application,
    ) -> Result<(), StoreError>;

    /// Retrieves an existing application of an existing tenant.
    async fn read_application(
        &self,
        tenant_id: Uuid,
        application_id: Uuid,
    ) -> Result<Application, StoreError>;

    /// Retrieves every application under an existing tenant, keyed by
    /// application identifier. Unordered.
    async fn read_all_applications(
        &self,
        tenant_id: Uuid,
    ) -> Result<HashMap<Uuid, Application>, StoreError>;

    /// Deletes an existing application of an existing tenant.
    async fn delete_application(
        &self,
        tenant_id: Uuid,
        application_id: Uuid,
    ) -> Result<(), StoreError>;
}
