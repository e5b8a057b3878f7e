//! Runtime orchestration and lifecycle management.
//!
//! - [`EshopSystem`] - starts the product and car actors and shuts them down
//! - [`setup_tracing`] - installs the tracing subscriber

pub mod eshop_system;
pub mod tracing;

pub use eshop_system::*;
pub use self::tracing::*;
