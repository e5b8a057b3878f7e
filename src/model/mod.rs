//! Pure data records implementing the [`Entity`](crate::framework::Entity) trait.
//!
//! Records derive `serde` so an adapter can decode submitted form or JSON bodies
//! straight into them; every field has a default, so a missing field decodes as empty.

pub mod car;
pub mod product;

pub use car::*;
pub use product::*;
