//! Token definitions for the traindown format
//!
//! Tokens are produced by the scanner in [lexing](crate::lexing) and consumed once by the
//! [SessionBuilder](crate::parsing::SessionBuilder) or the canonical formatter. A token is
//! immutable once emitted.

use crate::range::Range;
use serde::Serialize;
use std::fmt;

/// All possible token kinds in the traindown format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    DateTime,
    MetaKey,
    MetaValue,
    Movement,
    SupersetMovement,
    Note,
    Load,
    Fails,
    Reps,
    Sets,
}

impl TokenKind {
    /// Human readable label, as used by the `token-simple` output.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::DateTime => "Date / Time",
            TokenKind::MetaKey => "Metadata Key",
            TokenKind::MetaValue => "Metadata Value",
            TokenKind::Movement => "Movement",
            TokenKind::SupersetMovement => "Supersetted Movement",
            TokenKind::Note => "Note",
            TokenKind::Load => "Load",
            TokenKind::Fails => "Fails",
            TokenKind::Reps => "Reps",
            TokenKind::Sets => "Sets",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scanned token: its kind, the raw text it covers and where it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub range: Range,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, range: Range) -> Self {
        Self {
            kind,
            value: value.into(),
            range,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.value)
    }
}
