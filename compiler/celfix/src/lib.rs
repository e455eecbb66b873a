//! celfix - Golden Fixtures for Parsed Expressions
//!
//! Glue between protojson parse results and the adorned renderings of
//! `celfix_debug`:
//!
//! - [`corpus`]: the corpus input format and the fixture output format
//! - [`fixture`]: rendering one test, or a whole corpus in parallel
//! - [`commands`]: the handlers behind the `celfix` binary
//!
//! Logging goes through `tracing`; [`init_tracing`] installs a subscriber
//! when `RUST_LOG` is set.

use std::sync::Once;

pub mod commands;
pub mod corpus;
mod error;
pub mod fixture;

pub use error::CommandError;

static TRACING_INIT: Once = Once::new();

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
