//! Database session collaborators (driver seam)
//!
//! The store speaks to the cluster through these traits only. The
//! production implementation lives in the [`crate::scylla`] module;
//! tests supply an in-memory fake.

use async_trait::async_trait;
use uuid::Uuid;

use tenant_core::error::StoreError;

/// A statement parameter or result cell. The tables hold only uuid
/// and text columns, so this is the whole value vocabulary crossing
/// the driver boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CqlParam {
    Uuid(Uuid),
    Text(String),
}

/// One decoded result row.
#[derive(Debug, Clone, Default)]
pub struct CqlRow {
    columns: Vec<Option<CqlParam>>,
}

impl CqlRow {
    pub fn new(columns: Vec<Option<CqlParam>>) -> Self {
        Self { columns }
    }

    pub fn uuid(&self, index: usize) -> Result<Uuid, StoreError> {
        match self.columns.get(index) {
            Some(Some(CqlParam::Uuid(value))) => Ok(*value),
            other => Err(StoreError::Database(format!(
                "expected uuid at column {index}, got {other:?}"
            ))),
        }
    }

    pub fn text(&self, index: usize) -> Result<String, StoreError> {
        match self.columns.get(index) {
            Some(Some(CqlParam::Text(value))) => Ok(value.clone()),
            other => Err(StoreError::Database(format!(
                "expected text at column {index}, got {other:?}"
            ))),
        }
    }
}

/// A scoped database session. Acquired at operation entry and
/// released on drop, on every return path.
#[async_trait]
pub trait Session: Send + Sync {
    /// Executes a mutating statement, discarding any result.
    async fn execute(&self, cql: &str, params: &[CqlParam]) -> Result<(), StoreError>;

    /// Runs a select statement and decodes every result row.
    async fn query(&self, cql: &str, params: &[CqlParam]) -> Result<Vec<CqlRow>, StoreError>;
}

/// Hands out sessions against the cluster.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn create_session(&self) -> Result<Box<dyn Session>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_accessors_check_column_types() {
        let id = Uuid::new_v4();
        let row = CqlRow::new(vec![
            Some(CqlParam::Uuid(id)),
            Some(CqlParam::Text("billing".into())),
            None,
        ]);

        assert_eq!(row.uuid(0).unwrap(), id);
        assert_eq!(row.text(1).unwrap(), "billing");
        assert!(row.uuid(1).is_err());
        assert!(row.text(2).is_err());
        assert!(row.text(9).is_err());
    }
}
