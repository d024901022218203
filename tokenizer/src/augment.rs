use nlu_pipeline_support::{Attribute, Token};

/// The text of the marker token appended to a token sequence to represent
/// the sequence as a whole.
pub const CLS_TOKEN: &str = "__CLS__";

/// Which attributes receive a [`CLS_TOKEN`] when markers are enabled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MarkerPolicy {
    AllAttributes,
    Only(&'static [Attribute]),
}

impl MarkerPolicy {
    /// Attributes which are classified as a whole downstream. Intent labels
    /// are excluded.
    pub const CLASSIFIED: MarkerPolicy =
        MarkerPolicy::Only(&[Attribute::Text, Attribute::Response]);

    pub fn applies_to(self, attribute: Attribute) -> bool {
        match self {
            MarkerPolicy::AllAttributes => true,
            MarkerPolicy::Only(attributes) => attributes.contains(&attribute),
        }
    }
}

impl Default for MarkerPolicy {
    fn default() -> Self { MarkerPolicy::CLASSIFIED }
}

/// Append a [`CLS_TOKEN`] to `tokens` when `enabled` is set.
///
/// The marker starts one past the last character of `text`, so it always
/// sorts after every real token.
pub fn augment(
    mut tokens: Vec<Token>,
    text: &str,
    enabled: bool,
) -> Vec<Token> {
    if enabled {
        tokens.push(Token::new(CLS_TOKEN, text.chars().count()));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_leaves_tokens_alone() {
        let tokens = vec![Token::new("hi", 0)];

        let got = augment(tokens.clone(), "hi", false);

        assert_eq!(got, tokens);
    }

    #[test]
    fn marker_starts_after_the_last_character() {
        let tokens = vec![Token::new("café", 0), Token::new("noir", 6)];

        let got = augment(tokens, "café  noir", true);

        assert_eq!(got.len(), 3);
        assert_eq!(got[2], Token::new(CLS_TOKEN, 10));
    }

    #[test]
    fn empty_text_gets_a_lone_marker() {
        assert_eq!(
            augment(Vec::new(), "", true),
            vec![Token::new(CLS_TOKEN, 0)]
        );
        assert!(augment(Vec::new(), "", false).is_empty());
    }

    #[test]
    fn intents_are_not_marked_by_default() {
        let policy = MarkerPolicy::default();

        assert!(policy.applies_to(Attribute::Text));
        assert!(policy.applies_to(Attribute::Response));
        assert!(!policy.applies_to(Attribute::Intent));
    }

    #[test]
    fn mark_everything() {
        for attribute in Attribute::ALL {
            assert!(MarkerPolicy::AllAttributes.applies_to(attribute));
        }
    }
}
