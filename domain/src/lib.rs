//! Domain operations for the leaderboard.
//!
//! Re-exports the entity types from `entity_api` so that the `web` layer never
//! depends on `entity_api` or `entity` directly.
pub use entity_api::{session::LEADERBOARD_SIZE, sessions, Id};

pub mod error;
pub mod health;
pub mod session;
