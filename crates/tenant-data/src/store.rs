//! Tenant data service

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use tenant_core::domain::{Application, Tenant};
use tenant_core::error::StoreError;
use tenant_core::id::UuidGenerator;
use tenant_core::store::TenantStore;

use crate::session::{CqlParam, Session, SessionProvider};
use crate::statements;

/// [`TenantStore`] implementation over a CQL session provider.
///
/// Each operation acquires its own session (released on drop on every
/// exit path), verifies the referenced rows exist where the contract
/// requires it, and issues exactly one mutating statement. Referential
/// integrity between the two tables is enforced here via the
/// pre-checks, not by the storage engine.
pub struct TenantDataService {
    sessions: Arc<dyn SessionProvider>,
    uuid_generator: Arc<dyn UuidGenerator>,
}

impl TenantDataService {
    pub fn new(sessions: Arc<dyn SessionProvider>, uuid_generator: Arc<dyn UuidGenerator>) -> Self {
        Self {
            sessions,
            uuid_generator,
        }
    }
}

#[async_trait]
impl TenantStore for TenantDataService {
    async fn create_tenant(&self, tenant: &Tenant) -> Result<Uuid, StoreError> {
        let tenant_id = self.uuid_generator.generate_random_uuid()?;
        let session = self.sessions.create_session().await?;

        upsert_tenant(session.as_ref(), tenant_id, tenant).await?;

        info!(%tenant_id, "tenant created");
        Ok(tenant_id)
    }

    async fn update_tenant(&self, tenant_id: Uuid, tenant: &Tenant) -> Result<(), StoreError> {
        let session = self.sessions.create_session().await?;

        if !tenant_exists(session.as_ref(), tenant_id).await? {
            return Err(StoreError::TenantNotFound { tenant_id });
        }

        upsert_tenant(session.as_ref(), tenant_id, tenant).await
    }

    async fn read_tenant(&self, tenant_id: Uuid) -> Result<Tenant, StoreError> {
        let session = self.sessions.create_session().await?;

        let rows = session
            .query(statements::SELECT_TENANT, &[CqlParam::Uuid(tenant_id)])
            .await?;

        match rows.first() {
            Some(row) => Ok(Tenant::new(row.text(0)?)),
            None => Err(StoreError::TenantNotFound { tenant_id }),
        }
    }

    async fn delete_tenant(&self, tenant_id: Uuid) -> Result<(), StoreError> {
        let session = self.sessions.create_session().await?;

        if !tenant_exists(session.as_ref(), tenant_id).await? {
            return Err(StoreError::TenantNotFound { tenant_id });
        }

        session
            .execute(statements::DELETE_TENANT, &[CqlParam::Uuid(tenant_id)])
            .await
    }

    async fn create_application(
        &self,
        tenant_id: Uuid,
        application: &Application,
    ) -> Result<Uuid, StoreError> {
        let session = self.sessions.create_session().await?;

        if !tenant_exists(session.as_ref(), tenant_id).await? {
            return Err(StoreError::TenantNotFound { tenant_id });
        }

        let application_id = self.uuid_generator.generate_random_uuid()?;

        upsert_application(session.as_ref(), tenant_id, application_id, application).await?;

        info!(%tenant_id, %application_id, "application created");
        Ok(application_id)
    }

    async fn update_application(
        &self,
        tenant_id: Uuid,
        application_id: Uuid,
        application: &Application,
    ) -> Result<(), StoreError> {
        let session = self.sessions.create_session().await?;

        if !tenant_exists(session.as_ref(), tenant_id).await? {
            return Err(StoreError::TenantNotFound { tenant_id });
        }

        if !application_exists(session.as_ref(), tenant_id, application_id).await? {
            return Err(StoreError::ApplicationNotFound {
                tenant_id,
                application_id,
            });
        }

        upsert_application(session.as_ref(), tenant_id, application_id, application).await
    }

    async fn read_application(
        &self,
        tenant_id: Uuid,
        application_id: Uuid,
    ) -> Result<Application, StoreError> {
        let session = self.sessions.create_session().await?;

        if !tenant_exists(session.as_ref(), tenant_id).await? {
            return Err(StoreError::TenantNotFound { tenant_id });
        }

        let rows = session
            .query(
                statements::SELECT_APPLICATION,
                &[CqlParam::Uuid(tenant_id), CqlParam::Uuid(application_id)],
            )
            .await?;

        match rows.first() {
            Some(row) => Ok(Application::new(row.text(0)?)),
            None => Err(StoreError::ApplicationNotFound {
                tenant_id,
                application_id,
            }),
        }
    }

    async fn read_all_applications(
        &self,
        tenant_id: Uuid,
    ) -> Result<HashMap<Uuid, Application>, StoreError> {
        let session = self.sessions.create_session().await?;

        if !tenant_exists(session.as_ref(), tenant_id).await? {
            return Err(StoreError::TenantNotFound { tenant_id });
        }

        let rows = session
            .query(
                statements::SELECT_ALL_APPLICATIONS,
                &[CqlParam::Uuid(tenant_id)],
            )
            .await?;

        let mut applications = HashMap::with_capacity(rows.len());

        for row in rows {
            applications.insert(row.uuid(0)?, Application::new(row.text(1)?));
        }

        Ok(applications)
    }

    async fn delete_application(
        &self,
        tenant_id: Uuid,
        application_id: Uuid,
    ) -> Result<(), StoreError> {
        let session = self.sessions.create_session().await?;

        if !tenant_exists(session.as_ref(), tenant_id).await? {
            return Err(StoreError::TenantNotFound { tenant_id });
        }

        if !application_exists(session.as_ref(), tenant_id, application_id).await? {
            return Err(StoreError::ApplicationNotFound {
                tenant_id,
                application_id,
            });
        }

        session
            .execute(
                statements::DELETE_APPLICATION,
                &[CqlParam::Uuid(tenant_id), CqlParam::Uuid(application_id)],
            )
            .await
    }
}

// INSERT doubles as update; the storage engine upserts on the key.
async fn upsert_tenant(
    session: &dyn Session,
    tenant_id: Uuid,
    tenant: &Tenant,
) -> Result<(), StoreError> {
    session
        .execute(
            statements::UPSERT_TENANT,
            &[
                CqlParam::Uuid(tenant_id),
                CqlParam::Text(tenant.secret_key.clone()),
            ],
        )
        .await
}

async fn upsert_application(
    session: &dyn Session,
    tenant_id: Uuid,
    application_id: Uuid,
    application: &Application,
) -> Result<(), StoreError> {
    session
        .execute(
            statements::UPSERT_APPLICATION,
            &[
                CqlParam::Uuid(tenant_id),
                CqlParam::Uuid(application_id),
                CqlParam::Text(application.name.clone()),
            ],
        )
        .await
}

// Existence checks consume only row presence.
async fn tenant_exists(session: &dyn Session, tenant_id: Uuid) -> Result<bool, StoreError> {
    let rows = session
        .query(statements::SELECT_TENANT, &[CqlParam::Uuid(tenant_id)])
        .await?;

    Ok(!rows.is_empty())
}

async fn application_exists(
    session: &dyn Session,
    tenant_id: Uuid,
    application_id: Uuid,
) -> Result<bool, StoreError> {
    let rows = session
        .query(
            statements::SELECT_APPLICATION,
            &[CqlParam::Uuid(tenant_id), CqlParam::Uuid(application_id)],
        )
        .await?;

    Ok(!rows.is_empty())
}
