//! Lexer
//!
//!     This module turns traindown source text into a stream of [Token](crate::token::Token)s.
//!
//! The Lexing Pipeline
//!
//!     1. A [Cursor](cursor::Cursor) walks the source one character at a time. It keeps a
//!        rewind stack scoped to the token being scanned, so a state can look ahead and undo
//!        without ever seeking back into text that was already emitted.
//!
//!     2. The [Scanner](scanner::Scanner) is an explicit state machine over that cursor. The
//!        first non-whitespace character of a line or segment selects the branch:
//!
//!            @    date line
//!            #    metadata key, then metadata value
//!            *    note
//!            + '  movement header (superset marker, escaped name)
//!            bw   bodyweight load
//!            a-z  movement header
//!            0-9  load, or fails/reps/sets when followed by f/r/s
//!
//!        Any other leading character halts the scanner with a [LexError].
//!
//!     3. The [TokenStream](stream::TokenStream) hands tokens to exactly one consumer. By
//!        default the scanner runs on demand inside the consumer's `next()`. The channel
//!        backend runs it on its own thread behind a bounded queue instead.
//!
//! Line Terminators
//!
//!     A line ends at `\n`, `\r`, `;` or the end of input. `;` lets several directives share
//!     one physical line: `# unit: kg; * felt strong`.

pub mod common;
pub mod cursor;
pub mod scanner;
pub mod stream;

pub use common::{is_line_terminator, is_separator, LexError};
pub use cursor::Cursor;
pub use scanner::Scanner;
pub use stream::TokenStream;

use crate::token::Token;

/// Scan the whole source eagerly.
///
/// Mostly useful for tests and token dumps; the parser pulls from a [TokenStream] instead.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).collect()
}
