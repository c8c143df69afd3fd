//! Store errors

use thiserror::Error;
use uuid::Uuid;

/// Error taxonomy of the tenant data-access layer.
///
/// NotFound variants carry the offending identifier(s) so that
/// presentation layers can render messages themselves; dependency
/// failures carry the collaborator's message unchanged.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Tenant not found. Tenant ID: {tenant_id}")]
    TenantNotFound { tenant_id: Uuid },

    #[error("Tenant application not found. Tenant ID: {tenant_id}, Application ID: {application_id}")]
    ApplicationNotFound {
        tenant_id: Uuid,
        application_id: Uuid,
    },

    #[error("Identifier generation error: {0}")]
    IdGeneration(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl StoreError {
    /// True for the NotFound half of the taxonomy, false for
    /// dependency failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::TenantNotFound { .. } | StoreError::ApplicationNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_carry_identifiers() {
        let tenant_id = Uuid::new_v4();
        let application_id = Uuid::new_v4();

        let err = StoreError::TenantNotFound { tenant_id };
        assert!(err.to_string().contains(&tenant_id.to_string()));
        assert!(err.is_not_found());

        let err = StoreError::ApplicationNotFound {
            tenant_id,
            application_id,
        };
        assert!(err.to_string().contains(&tenant_id.to_string()));
        assert!(err.to_string().contains(&application_id.to_string()));
        assert!(err.is_not_found());
    }

    #[test]
    fn dependency_failures_are_not_not_found() {
        assert!(!StoreError::Database("no hosts".into()).is_not_found());
        assert!(!StoreError::IdGeneration("entropy".into()).is_not_found());
    }
}
