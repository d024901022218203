//! A pipeline component which splits text into [`Token`]s that know which
//! character they started at.
//!
//! The actual splitting is done by an [`Engine`], which works on UTF-8 bytes
//! and reports byte offsets. The [`Tokenizer`] turns those into character
//! offsets, optionally appends a [`CLS_TOKEN`] representing the whole
//! sequence, and stores the result on each [`Attribute`] of the messages it
//! is given.
//!
//! [`Token`]: nlu_pipeline_support::Token
//! [`Attribute`]: nlu_pipeline_support::Attribute

mod augment;
mod config;
mod engine;
mod offsets;
#[cfg(feature = "segmentation")]
mod segmentation;
mod tokenizer;

pub use crate::{
    augment::{augment, MarkerPolicy, CLS_TOKEN},
    config::{TokenizerConfig, USE_CLS_TOKEN},
    engine::{
        default_engine, required_packages, Engine, DEFAULT_ENGINE_PACKAGE,
    },
    offsets::{char_offset, DecodeError, OffsetCursor},
    tokenizer::Tokenizer,
};

#[cfg(feature = "segmentation")]
pub use crate::segmentation::SegmentationEngine;

use nlu_pipeline_support::{
    ArgumentMetadata, ArgumentType, Attribute, Metadata,
};

/// Describe the [`Tokenizer`] component.
pub fn metadata() -> Metadata {
    let mut metadata = Metadata::new("Tokenizer", env!("CARGO_PKG_VERSION"))
        .with_description(env!("CARGO_PKG_DESCRIPTION"))
        .with_repository(env!("CARGO_PKG_REPOSITORY"))
        .with_homepage(env!("CARGO_PKG_HOMEPAGE"))
        .with_tag("nlp")
        .with_tag("tokenizer")
        .with_argument(
            ArgumentMetadata::new(USE_CLS_TOKEN)
                .with_description(
                    "Add a __CLS__ token to the end of the list of tokens",
                )
                .with_default_value(TokenizerConfig::default().use_cls_token)
                .with_hint(ArgumentType::Boolean),
        );

    for attribute in Attribute::ALL {
        metadata = metadata.with_provides(attribute.tokens_key());
    }

    for package in required_packages() {
        metadata = metadata.with_requires(*package);
    }

    metadata
}
