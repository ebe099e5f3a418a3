//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for create/list/delete
///
/// Generic over any Entity type. All operations are async so a real store
/// can replace the in-memory one without touching the handlers.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Store a new entity and return it as stored
    async fn create(&self, entity: T) -> DomainResult<T>;

    /// List all entities in insertion order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Delete entity by ID
    async fn delete(&self, id: &T::Id) -> DomainResult<()>;
}
