/// A piece of text and the character offset it starts at.
///
/// Offsets are measured in Unicode scalar values (i.e. `char`s) from the
/// start of the original text, not in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub text: String,
    pub start: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        Token {
            text: text.into(),
            start,
        }
    }

    /// The character offset just past the end of this token.
    ///
    /// This is derived from [`Token::start`] and the length of
    /// [`Token::text`] rather than stored, so it is only meaningful for tokens
    /// whose text appears verbatim in the original string.
    pub fn end(&self) -> usize { self.start + self.text.chars().count() }
}
