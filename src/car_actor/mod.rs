//! Car-specific resource logic.
//!
//! Cars carry no field rules: only the presence check applied by
//! [`EntityService`](crate::framework::EntityService) guards their mutations.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CarClient;
use crate::framework::ResourceActor;
use crate::model::Car;

/// Creates a new Car actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Car>, CarClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CarClient::new(generic_client))
}
