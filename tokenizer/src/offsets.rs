//! Converting byte offsets into character offsets.

use std::str::Utf8Error;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("Byte offset {byte_offset} is past the end of the {len}-byte input")]
    OutOfBounds { byte_offset: usize, len: usize },
    #[error("Byte offset {byte_offset} doesn't fall on a UTF-8 character boundary")]
    InvalidOffset {
        byte_offset: usize,
        #[source]
        source: Utf8Error,
    },
    #[error("The token starting at byte offset {byte_offset} isn't valid UTF-8")]
    InvalidToken {
        byte_offset: usize,
        #[source]
        source: Utf8Error,
    },
}

/// Find the character offset corresponding to a byte offset in some UTF-8
/// encoded text.
///
/// This is the number of characters in `original[..byte_offset]`, so it
/// fails if `byte_offset` lands in the middle of a multi-byte character.
///
/// # Examples
///
/// ```rust
/// # use offset_tokenizer::char_offset;
/// let text = "café au lait";
/// // "é" takes up two bytes, so "au" starts at byte 6 but character 5
/// assert_eq!(text.find("au"), Some(6));
/// assert_eq!(char_offset(text.as_bytes(), 6)?, 5);
/// # Ok::<(), offset_tokenizer::DecodeError>(())
/// ```
pub fn char_offset(
    original: &[u8],
    byte_offset: usize,
) -> Result<usize, DecodeError> {
    let prefix = original.get(..byte_offset).ok_or(DecodeError::OutOfBounds {
        byte_offset,
        len: original.len(),
    })?;

    let prefix = std::str::from_utf8(prefix)
        .map_err(|source| DecodeError::InvalidOffset { byte_offset, source })?;

    Ok(prefix.chars().count())
}

/// Converts a sequence of byte offsets into character offsets, only
/// decoding the bytes between consecutive offsets.
///
/// Tokenizers hand back offsets in increasing order, so walking forward from
/// the previous offset keeps the total work linear in the length of the
/// text. Seeking backwards starts again from the beginning.
#[derive(Debug, Clone)]
pub struct OffsetCursor<'a> {
    original: &'a [u8],
    byte_offset: usize,
    char_offset: usize,
}

impl<'a> OffsetCursor<'a> {
    pub fn new(original: &'a [u8]) -> Self {
        OffsetCursor {
            original,
            byte_offset: 0,
            char_offset: 0,
        }
    }

    /// Move to `byte_offset`, returning the corresponding character offset.
    ///
    /// Gives the same result as [`char_offset()`]. The cursor doesn't move
    /// if an error is returned.
    pub fn seek(&mut self, byte_offset: usize) -> Result<usize, DecodeError> {
        if byte_offset > self.original.len() {
            return Err(DecodeError::OutOfBounds {
                byte_offset,
                len: self.original.len(),
            });
        }

        let (from_byte, from_char) = if byte_offset < self.byte_offset {
            (0, 0)
        } else {
            (self.byte_offset, self.char_offset)
        };

        let delta = &self.original[from_byte..byte_offset];
        let chars = std::str::from_utf8(delta)
            .map_err(|source| DecodeError::InvalidOffset { byte_offset, source })?
            .chars()
            .count();

        self.byte_offset = byte_offset;
        self.char_offset = from_char + chars;

        Ok(self.char_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_offsets_are_unchanged() {
        let text = "I love Rasa";

        for byte_offset in 0..=text.len() {
            assert_eq!(
                char_offset(text.as_bytes(), byte_offset).unwrap(),
                byte_offset
            );
        }
    }

    #[test]
    fn multi_byte_characters_count_once() {
        let text = "café";
        assert_eq!(text.len(), 5);

        assert_eq!(char_offset(text.as_bytes(), 5).unwrap(), 4);
        assert_eq!(char_offset(text.as_bytes(), 3).unwrap(), 3);
    }

    #[test]
    fn three_and_four_byte_characters() {
        let text = "€5 🦀!";
        let bang = text.find('!').unwrap();
        assert_eq!(bang, 9);

        assert_eq!(char_offset(text.as_bytes(), bang).unwrap(), 4);
    }

    #[test]
    fn splitting_a_character_is_an_error() {
        let err = char_offset("café".as_bytes(), 4).unwrap_err();

        assert!(matches!(
            err,
            DecodeError::InvalidOffset { byte_offset: 4, .. }
        ));
    }

    #[test]
    fn offsets_past_the_end_are_an_error() {
        let err = char_offset("café".as_bytes(), 6).unwrap_err();

        assert_eq!(
            err,
            DecodeError::OutOfBounds {
                byte_offset: 6,
                len: 5
            }
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(char_offset(b"", 0).unwrap(), 0);
        assert!(char_offset(b"", 1).is_err());
    }

    #[test]
    fn cursor_agrees_with_char_offset() {
        let text = "naïve café, déjà vu";
        let mut cursor = OffsetCursor::new(text.as_bytes());

        for (byte_offset, _) in text.char_indices() {
            assert_eq!(
                cursor.seek(byte_offset).unwrap(),
                char_offset(text.as_bytes(), byte_offset).unwrap(),
            );
        }
        assert_eq!(cursor.seek(text.len()).unwrap(), text.chars().count());
    }

    #[test]
    fn cursor_can_seek_backwards() {
        let text = "café au lait";
        let mut cursor = OffsetCursor::new(text.as_bytes());

        assert_eq!(cursor.seek(9).unwrap(), 8);
        assert_eq!(cursor.seek(6).unwrap(), 5);
        assert_eq!(cursor.seek(0).unwrap(), 0);
    }

    #[test]
    fn cursor_errors_leave_it_where_it_was() {
        let text = "café au lait";
        let mut cursor = OffsetCursor::new(text.as_bytes());
        cursor.seek(2).unwrap();

        assert!(matches!(
            cursor.seek(4),
            Err(DecodeError::InvalidOffset { byte_offset: 4, .. })
        ));
        assert!(matches!(
            cursor.seek(100),
            Err(DecodeError::OutOfBounds { .. })
        ));
        assert_eq!(cursor.seek(6).unwrap(), 5);
    }
}
