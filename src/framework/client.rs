//! # Resource Client
//!
//! A type-safe, cloneable handle to a [`ResourceActor`](super::ResourceActor).
//! Each call sends one [`ResourceRequest`] and awaits the reply on a fresh `oneshot`.

use tokio::sync::{mpsc, oneshot};

use super::entity::Entity;
use super::error::FrameworkError;
use super::message::ResourceRequest;

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Debug, Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    /// Validates and stores `entity`, returning it with its id assigned.
    pub async fn create(&self, entity: impl Into<Option<T>> + Send) -> Result<T, FrameworkError> {
        let entity = entity.into();
        self.request(|respond_to| ResourceRequest::Create { entity, respond_to })
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::FindAll { respond_to })
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>, FrameworkError> {
        let id = id.to_string();
        self.request(|respond_to| ResourceRequest::FindById { id, respond_to })
            .await
    }

    /// Validates and replaces the stored entity with the same id; `Ok(None)` if absent.
    pub async fn update(
        &self,
        entity: impl Into<Option<T>> + Send,
    ) -> Result<Option<T>, FrameworkError> {
        let entity = entity.into();
        self.request(|respond_to| ResourceRequest::Update { entity, respond_to })
            .await
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), FrameworkError> {
        let id = id.to_string();
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T> + Send,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
