//! Built-in commands shipped with the engine.
//!
//! Each submodule exports a constructor that assembles a [`crate::Command`]
//! from a grammar and a callback. Commands are constructed at startup and
//! registered with a dispatcher by the embedding application (or the CLI).

pub mod hello;
pub mod new_hire;

pub use hello::hello_world;
pub use new_hire::new_hire;
