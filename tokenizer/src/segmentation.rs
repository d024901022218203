use unicode_segmentation::UnicodeSegmentation;

use crate::{engine::DEFAULT_ENGINE_PACKAGE, Engine};

/// An [`Engine`] which splits text on Unicode word boundaries (UAX #29),
/// discarding whitespace.
///
/// Punctuation is kept as separate tokens.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SegmentationEngine;

impl Engine for SegmentationEngine {
    fn name(&self) -> &str { DEFAULT_ENGINE_PACKAGE }

    fn tokenize_with_offsets(&self, text: &[u8]) -> Vec<(Vec<u8>, usize)> {
        // Only the valid prefix of malformed input gets tokenized
        let text = match std::str::from_utf8(text) {
            Ok(s) => s,
            Err(e) => std::str::from_utf8(&text[..e.valid_up_to()])
                .unwrap_or_default(),
        };

        text.split_word_bound_indices()
            .filter(|(_, word)| !word.trim().is_empty())
            .map(|(offset, word)| (word.as_bytes().to_vec(), offset))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<(&str, usize)> {
        let tokens = SegmentationEngine.tokenize_with_offsets(text.as_bytes());

        tokens
            .into_iter()
            .map(|(bytes, offset)| {
                let word = &text[offset..offset + bytes.len()];
                assert_eq!(word.as_bytes(), bytes.as_slice());
                (word, offset)
            })
            .collect()
    }

    #[test]
    fn split_on_whitespace() {
        assert_eq!(
            words("I love Rasa"),
            vec![("I", 0), ("love", 2), ("Rasa", 7)]
        );
    }

    #[test]
    fn punctuation_is_separate() {
        assert_eq!(
            words("hi, café!"),
            vec![("hi", 0), (",", 2), ("café", 4), ("!", 9)]
        );
    }

    #[test]
    fn whitespace_only_input_has_no_tokens() {
        assert!(words("").is_empty());
        assert!(words(" \t\n ").is_empty());
    }

    #[test]
    fn malformed_input_stops_at_the_first_bad_byte() {
        let tokens =
            SegmentationEngine.tokenize_with_offsets(b"ok then \xff nope");

        assert_eq!(
            tokens,
            vec![(b"ok".to_vec(), 0), (b"then".to_vec(), 3)]
        );
    }
}
