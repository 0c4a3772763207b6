//! Command interpretation and per-save world state for Gloam.
//!
//! Turns free-text player input into resolved game entities and tracks
//! everything a playthrough changes: inventory, item states, reveals,
//! activations, container locks, visited rooms, and short-lived pronoun
//! context. Static content comes from `gloam-world`; all mutation is
//! shadow state behind the [`SaveStore`] trait, so any number of saves
//! can play the same world at once.

/// Engine configuration.
pub mod config;
/// Short-lived pronoun and "go back" context.
pub mod context;
/// Error types for the engine.
pub mod error;
/// Edit-distance matching for typo tolerance.
pub mod fuzzy;
/// Command parsing.
pub mod parse;
/// Object phrase resolution.
pub mod resolve;
/// The world state engine.
pub mod state;
/// Per-save shadow state persistence.
pub mod store;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use parse::{parse, ParsedInput};
pub use resolve::{ItemScope, Resolution};
pub use state::{MoveOutcome, RevealOutcome, StateEngine};
pub use store::{MemoryStore, SaveId, SaveRecord, SaveStore};
