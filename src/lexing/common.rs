//! Shared lexer definitions: errors and character classes.

use crate::range::Position;
use thiserror::Error;

/// Errors that halt the scanner.
///
/// These are fatal to the current scan: the stream ends after yielding one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character {found:?} at {position}")]
    UnexpectedCharacter { found: char, position: Position },

    #[error("metadata key {key:?} at {position} is missing a ':'")]
    MissingMetadataColon { key: String, position: Position },

    #[error("movement name {name:?} at {position} is missing a ':'")]
    MissingMovementColon { name: String, position: Position },

    #[error("the scanner thread stopped without finishing")]
    ProducerPanicked,
}

impl LexError {
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::MissingMetadataColon { position, .. }
            | LexError::MissingMovementColon { position, .. } => Some(*position),
            LexError::ProducerPanicked => None,
        }
    }
}

/// `None` is the end of input.
pub fn is_line_terminator(ch: Option<char>) -> bool {
    matches!(ch, None | Some('\n') | Some('\r') | Some(';'))
}

/// Characters skipped between tokens.
pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == ';'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_terminators() {
        assert!(is_line_terminator(None));
        assert!(is_line_terminator(Some('\n')));
        assert!(is_line_terminator(Some('\r')));
        assert!(is_line_terminator(Some(';')));
        assert!(!is_line_terminator(Some(' ')));
        assert!(!is_line_terminator(Some(':')));
    }

    #[test]
    fn test_error_display() {
        let err = LexError::UnexpectedCharacter {
            found: '!',
            position: Position::new(2, 4),
        };
        assert_eq!(err.to_string(), "unexpected character '!' at 2:4");
        assert_eq!(err.position(), Some(Position::new(2, 4)));
    }
}
