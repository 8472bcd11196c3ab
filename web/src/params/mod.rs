//! Typed parameters for endpoint inputs.
//!
//! Request bodies are validated by type only: any value that deserializes is
//! passed through to the domain unchanged.

pub(crate) mod session;
