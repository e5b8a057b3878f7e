//! # Resource Messages
//!
//! The request enum exchanged between a [`ResourceClient`](super::ResourceClient) and its
//! [`ResourceActor`](super::ResourceActor).
//!
//! The variants map one-to-one onto the [`EntityService`](super::EntityService) operations.
//! Every variant carries a `oneshot` sender the actor uses to reply.

use tokio::sync::oneshot;

use super::entity::Entity;
use super::error::FrameworkError;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a [`ResourceActor`](super::ResourceActor).
#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        entity: Option<T>,
        respond_to: Response<T>,
    },
    FindAll {
        respond_to: Response<Vec<T>>,
    },
    FindById {
        id: String,
        respond_to: Response<Option<T>>,
    },
    Update {
        entity: Option<T>,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
}
