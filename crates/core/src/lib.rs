//! Personas, their transcripts and the turn protocol between them.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod conversation;
mod error;
mod model_client;
mod persona;
pub mod transcript;

pub use conversation::{Conversation, Turn};
pub use error::{Error, ErrorKind};
pub use model_client::ModelClient;
pub use persona::Persona;
