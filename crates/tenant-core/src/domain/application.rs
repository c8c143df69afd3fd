//! Application domain entity

use serde::{Deserialize, Serialize};

/// An application record as stored in the `application` table, scoped
/// under its parent tenant. Keyed by (tenant identifier, application
/// identifier); neither identifier is part of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
