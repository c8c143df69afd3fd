//! Tenant domain entity

use serde::{Deserialize, Serialize};

/// A tenant record as stored in the `tenant` table. The identifier is
/// not part of the record; it is generated at creation time and used
/// as the row key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub secret_key: String,
}

impl Tenant {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }
}
