//! A backend-neutral protocol for chat completion services.
//!
//! Personas talk to the remote service only through the types in this
//! crate, so the service behind them can be swapped (a real endpoint, a
//! scripted fake in tests) without touching the conversation logic.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod message;
mod provider;

pub use error::*;
pub use message::*;
pub use provider::*;
