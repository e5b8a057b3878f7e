//! Generic resource framework.
//!
//! This module provides the building blocks shared by every entity type: identity-keyed
//! storage, the validation-and-identity service around it, and the actor that confines
//! that service to a single task.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that record types implement to be managed by the framework
//! - [`Repository`] / [`InMemoryRepository`] - Ordered in-memory storage
//! - [`EntityService`] - Validation before mutation, identifier assignment on create
//! - [`ResourceActor`] - Owns one service and processes requests sequentially
//! - [`ResourceClient`] - Cloneable async handle to an actor
//! - [`ValidationError`] / [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod repository;
pub mod service;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::Entity;
pub use error::{FieldViolation, FrameworkError, ValidationError};
pub use message::{ResourceRequest, Response};
pub use repository::{InMemoryRepository, Repository};
pub use service::{uuid_id, EntityService, IdGenerator};
