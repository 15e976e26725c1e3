//! Non-fatal problems recorded on a session while parsing.

use crate::range::Position;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The numeric performance field a value was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericField {
    Load,
    Fails,
    Reps,
    Sets,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericField::Load => "load",
            NumericField::Fails => "fails",
            NumericField::Reps => "reps",
            NumericField::Sets => "sets",
        };
        f.write_str(name)
    }
}

/// A value that could not be interpreted. The affected field keeps its default and parsing
/// goes on.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SemanticError {
    #[error("failed to parse date {value:?} at {position}, using the processing time instead")]
    InvalidDate { value: String, position: Position },

    #[error("failed to parse {field} {value:?} at {position}")]
    InvalidNumber {
        field: NumericField,
        value: String,
        position: Position,
    },
}

impl SemanticError {
    pub fn position(&self) -> Position {
        match self {
            SemanticError::InvalidDate { position, .. }
            | SemanticError::InvalidNumber { position, .. } => *position,
        }
    }
}
