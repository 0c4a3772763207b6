//! Turning object phrases into entity ids within the player's scope.

/// Multi-candidate adjudication.
pub mod ambiguity;
/// Examinable and container lookup.
pub mod examinables;
/// The tiered item cascade.
pub mod items;

pub use ambiguity::Resolution;
pub use examinables::{resolve_container, resolve_examinable};
pub use items::{item_universe, resolve_items, ItemScope};
