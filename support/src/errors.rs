use std::fmt::Display;

use crate::Attribute;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An argument a component was created with couldn't be used.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("The \"{name}\" argument is invalid")]
pub struct ArgumentError {
    pub name: String,
    #[source]
    pub reason: ArgumentErrorReason,
}

impl ArgumentError {
    pub fn not_found(name: impl Into<String>) -> Self {
        ArgumentError {
            name: name.into(),
            reason: ArgumentErrorReason::NotFound,
        }
    }

    pub fn invalid_value(name: impl Into<String>, error: impl Display) -> Self {
        ArgumentError {
            name: name.into(),
            reason: ArgumentErrorReason::InvalidValue(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgumentErrorReason {
    #[error("The argument wasn't defined")]
    NotFound,
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Errors that can occur while creating a component.
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    /// Something the component needs at runtime isn't available.
    #[error("The \"{package}\" package is required but isn't available")]
    MissingDependency { package: String },
}

impl CreateError {
    pub fn missing_dependency(package: impl Into<String>) -> Self {
        CreateError::MissingDependency {
            package: package.into(),
        }
    }
}

/// Errors that can occur while a component is training or processing.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The value stored under an attribute couldn't be processed.
    #[error(
        "Unable to process the \"{attribute}\" attribute{}",
        location(.example)
    )]
    Attribute {
        attribute: Attribute,
        /// The index of the offending example within its corpus, if the
        /// value came from training data.
        example: Option<usize>,
        #[source]
        source: BoxedError,
    },
}

impl RunError {
    pub fn attribute(
        attribute: Attribute,
        example: Option<usize>,
        error: impl Into<BoxedError>,
    ) -> Self {
        RunError::Attribute {
            attribute,
            example,
            source: error.into(),
        }
    }
}

fn location(example: &Option<usize>) -> String {
    match example {
        Some(index) => format!(" of example {index}"),
        None => String::new(),
    }
}
