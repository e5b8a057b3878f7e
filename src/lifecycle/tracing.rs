//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt layer filtered by `RUST_LOG`
//! (default `info`). Module paths are hidden (`with_target(false)`); every framework log
//! line carries an `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown, final store size
//! - **Mutations** (`info`): `Created`, `Updated`, `Deleted` with `id` and `size`
//! - **Rejections** (`info`): validation failures, with the aggregated messages
//! - **Reads and payloads** (`debug`): `FindAll`, `FindById`, full records on create/update
//!
//! ```bash
//! RUST_LOG=debug cargo run -- --log-format pretty
//! ```
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO Created entity_type="Product" id="5b0c..." size=1
//! INFO Create rejected entity_type="Product" error=validation failed: Product name must not be empty
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
