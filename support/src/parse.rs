//! Turning the string [`Argument`]s a component is created with into typed
//! values.

use std::{fmt::Display, str::FromStr};

use crate::ArgumentError;

/// A named configuration value, as it appears in a pipeline definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub value: String,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Argument {
            name: name.into(),
            value: value.into(),
        }
    }
}

pub fn required_arg<T>(
    args: &[Argument],
    name: &str,
) -> Result<T, ArgumentError>
where
    T: FromStr,
    T::Err: Display,
{
    optional_arg(args, name)?.ok_or_else(|| ArgumentError::not_found(name))
}

pub fn optional_arg<T>(
    args: &[Argument],
    name: &str,
) -> Result<Option<T>, ArgumentError>
where
    T: FromStr,
    T::Err: Display,
{
    for arg in args {
        if arg.name == name {
            return arg
                .value
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|e| ArgumentError::invalid_value(name, e));
        }
    }

    Ok(None)
}
