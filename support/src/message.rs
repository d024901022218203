use std::collections::BTreeMap;

use crate::{Attribute, Token};

/// A labelled training example.
///
/// Each [`Attribute`] has at most one raw value and, once a tokenizer has
/// run, at most one token sequence.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Example {
    values: BTreeMap<Attribute, String>,
    #[cfg_attr(feature = "serde", serde(default))]
    tokens: BTreeMap<Attribute, Vec<Token>>,
}

impl Example {
    /// Create an example with just the primary text set.
    pub fn new(text: impl Into<String>) -> Self {
        Example::default().with(Attribute::Text, text)
    }

    pub fn with(
        mut self,
        attribute: Attribute,
        value: impl Into<String>,
    ) -> Self {
        self.set(attribute, value);
        self
    }

    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        self.values.get(&attribute).map(|s| s.as_str())
    }

    pub fn set(&mut self, attribute: Attribute, value: impl Into<String>) {
        self.values.insert(attribute, value.into());
    }

    pub fn tokens(&self, attribute: Attribute) -> Option<&[Token]> {
        self.tokens.get(&attribute).map(|t| t.as_slice())
    }

    /// Look up a token sequence using its storage key (e.g.
    /// `"intent_tokens"`).
    pub fn tokens_by_key(&self, key: &str) -> Option<&[Token]> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.tokens_key() == key)
            .and_then(|a| self.tokens(a))
    }

    /// Store a token sequence, replacing whatever was previously stored for
    /// this attribute.
    pub fn set_tokens(&mut self, attribute: Attribute, tokens: Vec<Token>) {
        self.tokens.insert(attribute, tokens);
    }
}

/// The collection of examples a pipeline is trained on.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Corpus {
    pub examples: Vec<Example>,
}

impl Corpus {
    pub fn new(examples: Vec<Example>) -> Self { Corpus { examples } }

    pub fn len(&self) -> usize { self.examples.len() }

    pub fn is_empty(&self) -> bool { self.examples.is_empty() }
}

impl FromIterator<Example> for Corpus {
    fn from_iter<I: IntoIterator<Item = Example>>(iter: I) -> Self {
        Corpus::new(iter.into_iter().collect())
    }
}

/// A single piece of unlabelled text submitted for inference.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    tokens: Option<Vec<Token>>,
}

impl Request {
    pub fn new(text: impl Into<String>) -> Self {
        Request {
            text: text.into(),
            tokens: None,
        }
    }

    pub fn text(&self) -> &str { &self.text }

    pub fn tokens(&self) -> Option<&[Token]> { self.tokens.as_deref() }

    pub fn set_tokens(&mut self, tokens: Vec<Token>) {
        self.tokens = Some(tokens);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_attributes_have_no_value_or_tokens() {
        let example = Example::new("hello");

        assert_eq!(example.get(Attribute::Text), Some("hello"));
        assert_eq!(example.get(Attribute::Intent), None);
        assert_eq!(example.tokens(Attribute::Text), None);
    }

    #[test]
    fn setting_tokens_overwrites_the_previous_sequence() {
        let mut example = Example::new("hi there");
        example.set_tokens(
            Attribute::Text,
            vec![Token::new("hi", 0), Token::new("there", 3)],
        );

        example.set_tokens(Attribute::Text, vec![Token::new("hi", 0)]);

        assert_eq!(
            example.tokens(Attribute::Text),
            Some(&[Token::new("hi", 0)][..])
        );
    }

    #[test]
    fn tokens_can_be_looked_up_by_key() {
        let mut example =
            Example::new("hi").with(Attribute::Intent, "greet");
        example.set_tokens(Attribute::Intent, vec![Token::new("greet", 0)]);

        assert_eq!(
            example.tokens_by_key("intent_tokens"),
            Some(&[Token::new("greet", 0)][..])
        );
        assert_eq!(example.tokens_by_key("tokens"), None);
        assert_eq!(example.tokens_by_key("entities"), None);
    }

    #[test]
    fn requests_start_without_tokens() {
        let mut request = Request::new("hi");
        assert!(request.tokens().is_none());

        request.set_tokens(Vec::new());

        assert_eq!(request.tokens(), Some(&[][..]));
    }

    #[test]
    fn corpus_from_examples() {
        assert!(Corpus::default().is_empty());

        let corpus: Corpus =
            ["hi", "bye"].into_iter().map(Example::new).collect();

        assert_eq!(corpus.len(), 2);
        assert!(!corpus.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn examples_serialize_with_attribute_names() {
        let mut example =
            Example::new("hi").with(Attribute::Intent, "greet");
        example.set_tokens(Attribute::Text, vec![Token::new("hi", 0)]);

        let got = serde_json::to_value(&example).unwrap();

        assert_eq!(
            got,
            serde_json::json!({
                "values": { "text": "hi", "intent": "greet" },
                "tokens": { "text": [{ "text": "hi", "start": 0 }] },
            })
        );
    }
}
