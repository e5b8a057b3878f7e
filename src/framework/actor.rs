//! # Resource Actor
//!
//! The actor owns one [`EntityService`] and is the only code that ever touches it.
//!
//! **Concurrency Model**:
//! Requests from any number of cloned clients queue on one bounded channel and are
//! processed *sequentially* in the actor's loop. Neither the service nor the repository
//! needs a `Mutex`: exclusive ownership inside the task is the concurrency policy.
//! Racing writes to the same id resolve in channel-arrival order.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::client::ResourceClient;
use super::entity::Entity;
use super::message::ResourceRequest;
use super::repository::{InMemoryRepository, Repository};
use super::service::EntityService;

/// The generic actor that serializes access to one entity type's service.
pub struct ResourceActor<T: Entity, R: Repository<T> = InMemoryRepository<T>> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    service: EntityService<T, R>,
}

impl<T: Entity> ResourceActor<T> {
    /// Actor over an empty in-memory store with UUID identifiers.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_service(buffer_size, EntityService::new())
    }
}

impl<T: Entity, R: Repository<T>> ResourceActor<T, R> {
    pub fn with_service(
        buffer_size: usize,
        service: EntityService<T, R>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, service };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        let entity_type = T::KIND;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { entity, respond_to } => {
                    debug!(entity_type, ?entity, "Create");
                    let result = self.service.create(entity);
                    match &result {
                        Ok(created) => {
                            info!(entity_type, id = created.id(), size = self.service.len(), "Created")
                        }
                        Err(e) => info!(entity_type, error = %e, "Create rejected"),
                    }
                    let _ = respond_to.send(result.map_err(Into::into));
                }
                ResourceRequest::FindAll { respond_to } => {
                    let items = self.service.find_all();
                    debug!(entity_type, count = items.len(), "FindAll");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::FindById { id, respond_to } => {
                    let item = self.service.find_by_id(&id);
                    debug!(entity_type, %id, found = item.is_some(), "FindById");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { entity, respond_to } => {
                    debug!(entity_type, ?entity, "Update");
                    let result = self.service.update(entity);
                    match &result {
                        Ok(Some(updated)) => info!(entity_type, id = updated.id(), "Updated"),
                        Ok(None) => debug!(entity_type, "Update target not found"),
                        Err(e) => info!(entity_type, error = %e, "Update rejected"),
                    }
                    let _ = respond_to.send(result.map_err(Into::into));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    self.service.delete_by_id(&id);
                    info!(entity_type, %id, size = self.service.len(), "Deleted");
                    if respond_to.send(Ok(())).is_err() {
                        warn!(entity_type, %id, "Delete caller went away before reply");
                    }
                }
            }
        }

        info!(entity_type, size = self.service.len(), "Shutdown");
    }
}
