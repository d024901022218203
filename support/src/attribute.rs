use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A named, text-bearing field on a message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Attribute {
    /// The primary text of a message, the only attribute present at
    /// inference time.
    Text,
    /// The intent label attached to a training example.
    Intent,
    /// The response text attached to a training example.
    Response,
}

impl Attribute {
    /// Every attribute, primary text first.
    pub const ALL: [Attribute; 3] =
        [Attribute::Text, Attribute::Intent, Attribute::Response];

    /// The name this attribute is known by in training data.
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Text => "text",
            Attribute::Intent => "intent",
            Attribute::Response => "response",
        }
    }

    /// The key a token sequence for this attribute is stored under.
    pub const fn tokens_key(self) -> &'static str {
        match self {
            Attribute::Text => "tokens",
            Attribute::Intent => "intent_tokens",
            Attribute::Response => "response_tokens",
        }
    }
}

impl Default for Attribute {
    fn default() -> Self { Attribute::Text }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("\"{0}\" is not a known attribute")]
pub struct UnknownAttribute(pub String);
