//! # eshop-actors
//!
//! > **An in-memory product and car catalogue built on resource actors.**
//!
//! Two entity types, [`Product`](model::Product) and [`Car`](model::Car), share one
//! lifecycle: create (with an identifier generated when none is supplied), list, look up,
//! replace by identifier, and delete. Products are validated before every mutation; cars
//! are not.
//!
//! ## Layers
//!
//! ### 1. The Engine ([`framework`])
//! - [`Repository`](framework::Repository): ordered in-memory storage. Never fails; a
//!   missing id is `None`.
//! - [`EntityService`](framework::EntityService): the only holder of business policy.
//!   Validates before touching storage and assigns UUIDs on create.
//! - [`ResourceActor`](framework::ResourceActor) and
//!   [`ResourceClient`](framework::ResourceClient): the concurrency policy. Each service
//!   is owned by one Tokio task and processes requests one at a time.
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! [`EshopSystem`](lifecycle::EshopSystem) spawns the actors and shuts them down;
//! [`setup_tracing`](lifecycle::setup_tracing) installs structured logging.
//!
//! ### 3. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient) and [`CarClient`](clients::CarClient) are what
//! an adapter holds. Validation failures come back as a recoverable `Validation` variant
//! carrying per-field messages.
//!
//! ### 4. The Implementation ([`product_actor`], [`car_actor`])
//! `Entity` implementations and, for products, the validation rules.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod car_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
