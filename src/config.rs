//! Runtime configuration.
//!
//! Every option can be set on the command line or through an `ESHOP_*` environment variable.

use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Log line layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Single-line output with spans inline.
    #[default]
    Compact,
    /// Multi-line, human-oriented output.
    Pretty,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "eshop", about = "In-memory product and car catalogue", version)]
pub struct EshopConfig {
    /// Requests each actor can queue before senders wait.
    #[arg(
        long,
        env = "ESHOP_CHANNEL_CAPACITY",
        value_name = "N",
        default_value_t = DEFAULT_CHANNEL_CAPACITY,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub channel_capacity: usize,

    #[arg(long, env = "ESHOP_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Default for EshopConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_format: LogFormat::default(),
        }
    }
}
