//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! These are what an adapter layer (HTTP handlers, a CLI) holds: each maps framework
//! errors into the resource's own error type.

pub mod actor_client;
pub mod car_client;
pub mod product_client;

pub use actor_client::ActorClient;
pub use car_client::*;
pub use product_client::*;
