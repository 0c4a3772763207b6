//! The structured form of one line of player input.

/// A parsed player command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    /// The verb, lower-cased. Empty for blank input.
    pub verb: String,
    /// Object phrases being acted on, articles stripped.
    pub direct_objects: Vec<String>,
    /// Normalized preposition, when the command has one.
    pub preposition: Option<String>,
    /// The phrase after the preposition, articles stripped.
    pub indirect_object: Option<String>,
    /// The command used "all"/"everything": operate on the whole scope.
    pub multi_object: bool,
    /// The command used a pronoun; resolve through player context.
    pub uses_pronoun: bool,
    /// The raw line, for error messages.
    pub raw: String,
}

impl ParsedInput {
    /// A verb-only input with no objects.
    pub fn bare(verb: impl Into<String>) -> Self {
        let verb = verb.into();
        Self {
            raw: verb.clone(),
            verb,
            ..Self::default()
        }
    }

    /// Whether the command has no preposition clause.
    pub fn is_simple(&self) -> bool {
        self.preposition.is_none()
    }

    /// Whether the command names more than one direct object.
    pub fn has_multiple_objects(&self) -> bool {
        self.direct_objects.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_input_is_simple() {
        let input = ParsedInput::bare("look");
        assert_eq!(input.verb, "look");
        assert!(input.is_simple());
        assert!(!input.has_multiple_objects());
        assert!(input.direct_objects.is_empty());
    }
}
