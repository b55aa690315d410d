//! A terminal session that stages a conversation between two personas.
//!
//! The crate includes a CLI tool for using in the terminal. The session is
//! generic over its input and output, so it can also be driven from other
//! hosts or from tests.

#![deny(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

mod config;
mod progress;
mod report;
mod session;

pub use config::{Config, ConfigError};
pub use report::report_error;
pub use session::{Session, SessionError};

/// Re-exports of [`banter_core`] crate.
pub mod core {
    pub use banter_core::*;
}
