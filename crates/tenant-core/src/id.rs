//! Identifier generation collaborator

use uuid::Uuid;

use crate::error::StoreError;

/// Generates the random unique identifiers handed out by the create
/// operations. Injected so that tests can control or fail generation.
pub trait UuidGenerator: Send + Sync {
    fn generate_random_uuid(&self) -> Result<Uuid, StoreError>;
}

/// Production generator backed by random (version 4) UUIDs.
#[derive(Debug, Clone, Default)]
pub struct RandomUuidGenerator;

impl UuidGenerator for RandomUuidGenerator {
    fn generate_random_uuid(&self) -> Result<Uuid, StoreError> {
        Ok(Uuid::new_v4())
    }
}
