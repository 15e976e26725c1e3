//! The scanner state machine
//!
//! Each state is a method that inspects the cursor and returns a [Transition]: move to
//! another state, emit a token and move on, or stop. The scanner is an [Iterator], so it
//! only runs as far as its consumer pulls.

use super::common::{is_line_terminator, is_separator, LexError};
use super::cursor::Cursor;
use crate::token::{Token, TokenKind};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Whitespace,
    DateTime,
    MetaKey,
    MetaValue,
    /// A movement name or a load; decided by the first character.
    Value,
    Movement,
    Note,
    Number,
}

#[derive(Debug)]
enum Transition {
    Next(State),
    Emit(Token, State),
    Done,
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: Option<State>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: Some(State::Idle),
        }
    }

    /// The state the next call to `next()` resumes from. `None` once the scan is over.
    pub fn state(&self) -> Option<State> {
        self.state
    }

    fn run(&mut self, state: State) -> Result<Transition, LexError> {
        match state {
            State::Idle => Ok(self.idle()),
            State::Whitespace => Ok(self.whitespace()),
            State::DateTime => Ok(self.date_time()),
            State::MetaKey => self.meta_key(),
            State::MetaValue => Ok(self.meta_value()),
            State::Value => self.value(),
            State::Movement => self.movement(),
            State::Note => Ok(self.note()),
            State::Number => Ok(self.number()),
        }
    }

    fn idle(&mut self) -> Transition {
        match self.cursor.peek() {
            None => Transition::Done,
            Some(ch) if is_separator(ch) => Transition::Next(State::Whitespace),
            Some('@') => Transition::Next(State::DateTime),
            Some('#') => Transition::Next(State::MetaKey),
            Some('*') => Transition::Next(State::Note),
            Some(_) => Transition::Next(State::Value),
        }
    }

    fn whitespace(&mut self) -> Transition {
        self.cursor
            .take_until(|ch| !matches!(ch, Some(c) if is_separator(c)));
        self.cursor.ignore();
        Transition::Next(State::Idle)
    }

    fn date_time(&mut self) -> Transition {
        self.cursor.take("@ ");
        self.cursor.ignore();
        self.cursor.take_until(is_line_terminator);
        Transition::Emit(self.cursor.emit(TokenKind::DateTime), State::Idle)
    }

    fn meta_key(&mut self) -> Result<Transition, LexError> {
        self.cursor.take("# ");
        self.cursor.ignore();

        let stop = self
            .cursor
            .take_until(|ch| ch == Some(':') || is_line_terminator(ch));
        if stop != Some(':') {
            return Err(LexError::MissingMetadataColon {
                key: self.cursor.current().to_string(),
                position: self.cursor.token_start(),
            });
        }

        Ok(Transition::Emit(
            self.cursor.emit(TokenKind::MetaKey),
            State::MetaValue,
        ))
    }

    fn meta_value(&mut self) -> Transition {
        self.cursor.take(": ");
        self.cursor.ignore();
        self.cursor.take_until(is_line_terminator);
        Transition::Emit(self.cursor.emit(TokenKind::MetaValue), State::Idle)
    }

    fn note(&mut self) -> Transition {
        self.cursor.take("* ");
        self.cursor.ignore();
        // Trailing whitespace stays: notes keep a ragged right edge.
        self.cursor.take_until(is_line_terminator);
        Transition::Emit(self.cursor.emit(TokenKind::Note), State::Idle)
    }

    fn value(&mut self) -> Result<Transition, LexError> {
        let position = self.cursor.token_start();

        match self.cursor.next_char() {
            None => Ok(Transition::Done),
            Some('+') | Some('\'') => {
                self.cursor.rewind();
                Ok(Transition::Next(State::Movement))
            }
            Some(ch) if ch.is_alphabetic() => {
                let bodyweight =
                    matches!(ch, 'b' | 'B') && matches!(self.cursor.peek(), Some('w' | 'W'));
                if !bodyweight {
                    self.cursor.rewind();
                    return Ok(Transition::Next(State::Movement));
                }

                self.cursor
                    .take_until(|ch| is_line_terminator(ch) || ch.is_some_and(char::is_whitespace));
                Ok(Transition::Emit(
                    self.cursor.emit(TokenKind::Load),
                    State::Idle,
                ))
            }
            Some(ch) if ch.is_ascii_digit() || ch == '.' => Ok(Transition::Next(State::Number)),
            Some(found) => Err(LexError::UnexpectedCharacter { found, position }),
        }
    }

    fn movement(&mut self) -> Result<Transition, LexError> {
        let mut kind = TokenKind::Movement;
        let mut ch = self.cursor.next_char();

        if ch == Some('+') {
            kind = TokenKind::SupersetMovement;
            self.cursor.take(" ");
            self.cursor.ignore();
            ch = self.cursor.next_char();
        }

        if ch == Some('\'') {
            self.cursor.ignore();
        } else {
            self.cursor.rewind();
        }

        let stop = self
            .cursor
            .take_until(|ch| ch == Some(':') || is_line_terminator(ch));
        if stop != Some(':') {
            return Err(LexError::MissingMovementColon {
                name: self.cursor.current().to_string(),
                position: self.cursor.token_start(),
            });
        }

        let token = self.cursor.emit(kind);
        self.cursor.take(":");
        self.cursor.ignore();

        Ok(Transition::Emit(token, State::Idle))
    }

    fn number(&mut self) -> Transition {
        self.cursor.take("0123456789.");

        let kind = match self.cursor.peek() {
            Some('f' | 'F') => TokenKind::Fails,
            Some('r' | 'R') => TokenKind::Reps,
            Some('s' | 'S') => TokenKind::Sets,
            _ => TokenKind::Load,
        };
        let token = self.cursor.emit(kind);

        self.cursor.take("fFrRsS ");
        self.cursor.ignore();

        Transition::Emit(token, State::Idle)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let state = self.state?;

            match self.run(state) {
                Ok(Transition::Next(next)) => {
                    trace!(from = ?state, to = ?next, "scanner transition");
                    self.state = Some(next);
                }
                Ok(Transition::Emit(token, next)) => {
                    trace!(kind = ?token.kind, value = %token.value, range = %token.range, "emit");
                    self.state = Some(next);
                    return Some(Ok(token));
                }
                Ok(Transition::Done) => {
                    self.state = None;
                    return None;
                }
                Err(err) => {
                    self.state = None;
                    return Some(Err(err));
                }
            }
        }
    }
}
