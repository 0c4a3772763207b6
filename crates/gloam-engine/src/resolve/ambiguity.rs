//! Collapsing multi-candidate matches to one entity or a clarification.

use std::fmt::Write as _;

use gloam_world::{ItemId, World};

/// Outcome of adjudicating a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one entity matched, or auto-disambiguation picked one.
    Resolved(ItemId),
    /// More than one candidate survives; the player must clarify.
    Ambiguous {
        /// The surviving candidates, in discovery order.
        candidates: Vec<ItemId>,
        /// A numbered clarification prompt.
        message: String,
    },
    /// No candidate matched the phrase.
    NotFound {
        /// A message quoting the original phrase.
        message: String,
    },
}

/// Adjudicate a resolver candidate list against its original phrase.
///
/// Multi-candidate lists first try auto-disambiguation: a sole quest item
/// wins, then a sole collectable. The order is fixed; unique plot items
/// always take ties.
pub fn resolve(world: &World, candidates: &[ItemId], phrase: &str) -> Resolution {
    match candidates {
        [] => Resolution::NotFound {
            message: format!("There is no '{phrase}' here."),
        },
        [only] => Resolution::Resolved(*only),
        many => {
            let quest: Vec<ItemId> = many
                .iter()
                .copied()
                .filter(|&id| world.item(id).is_some_and(|item| item.quest_item))
                .collect();
            if let [winner] = quest[..] {
                return Resolution::Resolved(winner);
            }

            let collectable: Vec<ItemId> = many
                .iter()
                .copied()
                .filter(|&id| world.item(id).is_some_and(|item| item.collectable))
                .collect();
            if let [winner] = collectable[..] {
                return Resolution::Resolved(winner);
            }

            let mut message = String::from("Which do you mean:\n");
            for (index, &id) in many.iter().enumerate() {
                let name = world.item(id).map_or("?", |item| item.name.as_str());
                let _ = writeln!(message, "  {}. {}", index + 1, name);
            }
            message.push_str("(Please be more specific, e.g., use an adjective)");

            Resolution::Ambiguous {
                candidates: many.to_vec(),
                message,
            }
        }
    }
}
