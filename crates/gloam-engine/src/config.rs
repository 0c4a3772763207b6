//! Engine configuration.

use chrono::Duration;

/// Tunable parameters for a game.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Health a new save starts with.
    pub starting_health: u32,
    /// Score awarded for completing a room action.
    pub action_score: u32,
    /// Bonus score awarded on winning.
    pub win_score: u32,
    /// Maximum edit distance for fuzzy matching.
    pub fuzzy_max_distance: usize,
    /// How long a last-mentioned item stays usable for pronouns.
    pub item_context_ttl: Duration,
    /// How long a last room stays usable for "go back".
    pub room_context_ttl: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_health: 100,
            action_score: 10,
            win_score: 100,
            fuzzy_max_distance: 2,
            item_context_ttl: Duration::minutes(5),
            room_context_ttl: Duration::minutes(10),
        }
    }
}

impl EngineConfig {
    /// Set the starting health.
    pub fn with_starting_health(mut self, health: u32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the fuzzy-matching distance threshold.
    pub fn with_fuzzy_max_distance(mut self, distance: usize) -> Self {
        self.fuzzy_max_distance = distance;
        self
    }
}
