use crate::framework::{Entity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read and delete operations.
///
/// Create and update stay on the concrete clients, which name them after their resource.
#[async_trait]
pub trait ActorClient<T: Entity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<FrameworkError> + Send;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Every stored entity, in insertion order.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_all().await.map_err(Into::into)
    }

    /// Fetch an entity by ID. `Ok(None)` when it does not exist.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_by_id(id).await.map_err(Into::into)
    }

    /// Delete an entity by ID. Deleting an unknown ID succeeds.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn delete_by_id(&self, id: &str) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete_by_id(id).await.map_err(Into::into)
    }
}
