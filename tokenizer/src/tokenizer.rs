use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

use nlu_pipeline_support::{
    logging, Argument, Attribute, Component, Corpus, CreateError, Request,
    RunError, Token,
};

use crate::{
    augment, default_engine, DecodeError, Engine, OffsetCursor,
    TokenizerConfig,
};

/// Splits the text attributes of a message into [`Token`]s using an
/// [`Engine`], mapping the engine's byte offsets back to character offsets.
#[derive(Clone)]
pub struct Tokenizer {
    engine: Arc<dyn Engine>,
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a [`Tokenizer`], making sure the engine can actually be used.
    pub fn new(
        engine: Arc<dyn Engine>,
        config: TokenizerConfig,
    ) -> Result<Self, CreateError> {
        if !engine.is_available() {
            return Err(CreateError::missing_dependency(engine.name()));
        }

        Ok(Tokenizer { engine, config })
    }

    /// Create a [`Tokenizer`] backed by the [`default_engine()`], configured
    /// from a pipeline definition's arguments.
    pub fn from_args(args: &[Argument]) -> Result<Self, CreateError> {
        logging::initialize_logger();

        let config = TokenizerConfig::try_from(args)?;
        let engine = default_engine()?;

        Tokenizer::new(engine, config)
    }

    pub fn config(&self) -> &TokenizerConfig { &self.config }

    /// Split `text` into tokens, exactly as the engine sees them.
    pub fn tokenize_raw(&self, text: &str) -> Result<Vec<Token>, DecodeError> {
        let encoded = text.as_bytes();
        let mut cursor = OffsetCursor::new(encoded);

        self.engine
            .tokenize_with_offsets(encoded)
            .into_iter()
            .map(|(bytes, byte_offset)| {
                let start = cursor.seek(byte_offset)?;
                let text = String::from_utf8(bytes).map_err(|e| {
                    DecodeError::InvalidToken {
                        byte_offset,
                        source: e.utf8_error(),
                    }
                })?;

                Ok(Token { text, start })
            })
            .collect()
    }

    /// Split `text` into tokens, appending a [`crate::CLS_TOKEN`] if this
    /// tokenizer is configured to mark the attribute.
    pub fn tokenize(
        &self,
        text: &str,
        attribute: Attribute,
    ) -> Result<Vec<Token>, DecodeError> {
        let tokens = self.tokenize_raw(text)?;
        Ok(augment(tokens, text, self.config.marks(attribute)))
    }
}

impl Component for Tokenizer {
    /// Tokenize every attribute that has a value on every example.
    ///
    /// Either every sequence is written or, if any value fails to tokenize,
    /// none are.
    fn train(&self, corpus: &mut Corpus) -> Result<(), RunError> {
        if corpus.is_empty() {
            tracing::debug!("No training examples to tokenize");
            return Ok(());
        }

        let mut pending = Vec::new();

        for (index, example) in corpus.examples.iter().enumerate() {
            for attribute in Attribute::ALL {
                let value = match example.get(attribute) {
                    Some(v) => v,
                    None => continue,
                };

                let tokens = self.tokenize(value, attribute).map_err(|e| {
                    tracing::warn!(
                        example = index,
                        %attribute,
                        error = &e as &(dyn std::error::Error + 'static),
                        "Unable to tokenize the training data",
                    );
                    RunError::attribute(attribute, Some(index), e)
                })?;

                tracing::debug!(
                    example = index,
                    %attribute,
                    token_count = tokens.len(),
                    "Tokenized",
                );

                pending.push((index, attribute, tokens));
            }
        }

        let sequences = pending.len();

        for (index, attribute, tokens) in pending {
            corpus.examples[index].set_tokens(attribute, tokens);
        }

        tracing::info!(
            examples = corpus.len(),
            sequences,
            "Tokenized the training data",
        );

        Ok(())
    }

    /// Tokenize the request's primary text.
    fn process(&self, request: &mut Request) -> Result<(), RunError> {
        let tokens = self
            .tokenize(request.text(), Attribute::Text)
            .map_err(|e| RunError::attribute(Attribute::Text, None, e))?;

        tracing::debug!(token_count = tokens.len(), "Tokenized a request");

        request.set_tokens(tokens);

        Ok(())
    }
}

impl Debug for Tokenizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Tokenizer { engine, config } = self;

        f.debug_struct("Tokenizer")
            .field("engine", &engine.name())
            .field("config", config)
            .finish()
    }
}
