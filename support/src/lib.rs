#![doc = include_str!("../README.md")]

mod attribute;
mod component;
mod errors;
pub mod logging;
mod message;
mod metadata;
pub mod parse;
mod token;

pub use crate::{
    attribute::{Attribute, UnknownAttribute},
    component::Component,
    errors::{ArgumentError, ArgumentErrorReason, CreateError, RunError},
    message::{Corpus, Example, Request},
    metadata::{ArgumentHint, ArgumentMetadata, ArgumentType, Metadata},
    parse::Argument,
    token::Token,
};
