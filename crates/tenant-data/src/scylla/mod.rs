//! ScyllaDB driver adapter
//!
//! Implements the session collaborators over the `scylla` driver.
//! Value mapping between the store's [`CqlParam`] vocabulary and the
//! driver's native `CqlValue` happens here and nowhere else.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use scylla::client::session::Session as DriverSession;
use scylla::client::session_builder::SessionBuilder;
use scylla::value::{CqlValue, Row};
use tracing::debug;

use tenant_core::error::StoreError;

use crate::config::ScyllaConfig;
use crate::session::{CqlParam, CqlRow, Session, SessionProvider};

/// Session provider over a shared driver session.
///
/// The driver owns the connection pool, consistency level, and retry
/// policy. `create_session` hands out lightweight handles over the
/// shared session, keeping the store's per-operation acquire/release
/// contract cheap.
pub struct ScyllaSessionProvider {
    session: Arc<DriverSession>,
}

impl ScyllaSessionProvider {
    /// Connects to the cluster described by `config`.
    pub async fn connect(config: &ScyllaConfig) -> Result<Self, StoreError> {
        debug!(nodes = ?config.nodes, keyspace = %config.keyspace, "connecting to cluster");

        let session = SessionBuilder::new()
            .known_nodes(&config.nodes)
            .connection_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .use_keyspace(&config.keyspace, false)
            .build()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self {
            session: Arc::new(session),
        })
    }
}

#[async_trait]
impl SessionProvider for ScyllaSessionProvider {
    async fn create_session(&self) -> Result<Box<dyn Session>, StoreError> {
        Ok(Box::new(ScyllaCqlSession {
            session: Arc::clone(&self.session),
        }))
    }
}

struct ScyllaCqlSession {
    session: Arc<DriverSession>,
}

#[async_trait]
impl Session for ScyllaCqlSession {
    async fn execute(&self, cql: &str, params: &[CqlParam]) -> Result<(), StoreError> {
        self.session
            .query_unpaged(cql, to_driver_values(params))
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    async fn query(&self, cql: &str, params: &[CqlParam]) -> Result<Vec<CqlRow>, StoreError> {
        let result = self
            .session
            .query_unpaged(cql, to_driver_values(params))
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let rows_result = result
            .into_rows_result()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut rows = Vec::with_capacity(rows_result.rows_num());

        for row in rows_result
            .rows::<Row>()
            .map_err(|e| StoreError::Database(e.to_string()))?
        {
            let row = row.map_err(|e| StoreError::Database(e.to_string()))?;
            rows.push(from_driver_row(row)?);
        }

        Ok(rows)
    }
}

fn to_driver_values(params: &[CqlParam]) -> Vec<CqlValue> {
    params
        .iter()
        .map(|param| match param {
            CqlParam::Uuid(value) => CqlValue::Uuid(*value),
            CqlParam::Text(value) => CqlValue::Text(value.clone()),
        })
        .collect()
}

fn from_driver_row(row: Row) -> Result<CqlRow, StoreError> {
    let columns = row
        .columns
        .into_iter()
        .map(|column| match column {
            Some(CqlValue::Uuid(value)) => Ok(Some(CqlParam::Uuid(value))),
            Some(CqlValue::Text(value)) => Ok(Some(CqlParam::Text(value))),
            Some(other) => Err(StoreError::Database(format!(
                "unsupported column type in result row: {other:?}"
            ))),
            None => Ok(None),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CqlRow::new(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn maps_params_to_driver_values() {
        let id = Uuid::new_v4();
        let values = to_driver_values(&[CqlParam::Uuid(id), CqlParam::Text("s3cr3t".into())]);

        assert_eq!(
            values,
            vec![CqlValue::Uuid(id), CqlValue::Text("s3cr3t".into())]
        );
    }

    #[test]
    fn maps_driver_rows_back() {
        let id = Uuid::new_v4();
        let row = Row {
            columns: vec![
                Some(CqlValue::Uuid(id)),
                Some(CqlValue::Text("billing".into())),
                None,
            ],
        };

        let mapped = from_driver_row(row).unwrap();
        assert_eq!(mapped.uuid(0).unwrap(), id);
        assert_eq!(mapped.text(1).unwrap(), "billing");
    }

    #[test]
    fn rejects_unsupported_column_types() {
        let row = Row {
            columns: vec![Some(CqlValue::Int(7))],
        };

        assert!(matches!(
            from_driver_row(row),
            Err(StoreError::Database(_))
        ));
    }
}
