use nlu_pipeline_support::{parse, Argument, Attribute, CreateError};

use crate::MarkerPolicy;

/// The name of the argument controlling whether a [`crate::CLS_TOKEN`] is
/// appended.
pub const USE_CLS_TOKEN: &str = "use_cls_token";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Append a [`crate::CLS_TOKEN`] to the tokens of every attribute
    /// covered by [`TokenizerConfig::marker_policy`].
    ///
    /// The default policy is [`MarkerPolicy::CLASSIFIED`], so intents never
    /// get a marker unless the policy is changed to
    /// [`MarkerPolicy::AllAttributes`].
    pub use_cls_token: bool,
    pub marker_policy: MarkerPolicy,
}

impl TokenizerConfig {
    pub const fn new() -> Self {
        TokenizerConfig {
            use_cls_token: true,
            marker_policy: MarkerPolicy::CLASSIFIED,
        }
    }

    pub const fn with_cls_token(self, use_cls_token: bool) -> Self {
        TokenizerConfig {
            use_cls_token,
            ..self
        }
    }

    pub const fn with_marker_policy(self, marker_policy: MarkerPolicy) -> Self {
        TokenizerConfig {
            marker_policy,
            ..self
        }
    }

    /// Should tokens for this attribute end with a marker?
    pub fn marks(&self, attribute: Attribute) -> bool {
        self.use_cls_token && self.marker_policy.applies_to(attribute)
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self { TokenizerConfig::new() }
}

impl TryFrom<&[Argument]> for TokenizerConfig {
    type Error = CreateError;

    fn try_from(args: &[Argument]) -> Result<Self, Self::Error> {
        let defaults = TokenizerConfig::default();
        let use_cls_token = parse::optional_arg(args, USE_CLS_TOKEN)?
            .unwrap_or(defaults.use_cls_token);

        Ok(defaults.with_cls_token(use_cls_token))
    }
}
