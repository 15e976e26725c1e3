//! Rune cursor with a token-scoped rewind buffer
//!
//! The cursor tracks two byte offsets into the source: `start`, where the token being
//! scanned began, and `position`, how far scanning has advanced. Every character read is
//! pushed on the rewind stack so states can look ahead and back off. The stack is cleared
//! whenever the pending text is emitted or ignored, which bounds rewinding to the current
//! token.

use crate::range::{Position, SourceLocation};
use crate::token::{Token, TokenKind};

pub struct Cursor<'a> {
    source: &'a str,
    locator: SourceLocation,
    start: usize,
    position: usize,
    /// `None` entries record reads past the end of input.
    rewind: Vec<Option<char>>,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            locator: SourceLocation::new(source),
            start: 0,
            position: 0,
            rewind: Vec::new(),
        }
    }

    /// Advance one character. Returns `None` at the end of input.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.source[self.position..].chars().next();
        if let Some(ch) = ch {
            self.position += ch.len_utf8();
        }
        self.rewind.push(ch);
        ch
    }

    /// Undo the most recent [next_char](Self::next_char), never moving before the token start.
    pub fn rewind(&mut self) {
        if let Some(Some(ch)) = self.rewind.pop() {
            self.position = self
                .position
                .saturating_sub(ch.len_utf8())
                .max(self.start);
        }
    }

    pub fn peek(&mut self) -> Option<char> {
        let ch = self.next_char();
        self.rewind();
        ch
    }

    /// Advance while the next character is in `charset`.
    pub fn take(&mut self, charset: &str) {
        while matches!(self.next_char(), Some(ch) if charset.contains(ch)) {}
        self.rewind();
    }

    /// Advance until `stop` matches, leaving the stopping character unread.
    ///
    /// Returns the stopping character, `None` meaning the end of input.
    pub fn take_until<F>(&mut self, stop: F) -> Option<char>
    where
        F: Fn(Option<char>) -> bool,
    {
        loop {
            let ch = self.next_char();
            if stop(ch) {
                self.rewind();
                return ch;
            }
        }
    }

    /// The pending text, from the token start to the cursor.
    pub fn current(&self) -> &'a str {
        &self.source[self.start..self.position]
    }

    /// Drop the pending text.
    pub fn ignore(&mut self) {
        self.rewind.clear();
        self.start = self.position;
    }

    /// Turn the pending text into a token and start a new one at the cursor.
    pub fn emit(&mut self, kind: TokenKind) -> Token {
        let range = self
            .locator
            .byte_range_to_range(self.source, self.start..self.position);
        let token = Token::new(kind, self.current(), range);
        self.ignore();
        token
    }

    /// Where the pending token starts.
    pub fn token_start(&self) -> Position {
        self.locator.byte_to_position(self.source, self.start)
    }
}
