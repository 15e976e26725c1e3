//! Parsing
//!
//!     Turns source text into a [Session]. [parse] drives the lazy token stream; use
//!     [parse_with_config] to pick the backend from a [ParsingConfig].
//!
//!     - [builder]: the token-to-session fold and its [Context] tracking.
//!     - [dates]: lenient date-line interpretation.
//!     - [values]: load and count literals.
//!
//!     Lexical errors end the parse with a [ParseError]. Everything else is recorded on
//!     `Session::errors`.

pub mod builder;
pub mod dates;
pub mod values;

pub use crate::model::SemanticError;
pub use builder::{Context, SessionBuilder};
pub use dates::parse_date;
pub use values::{parse_count, parse_load, LoadLiteral};

use crate::config::ParsingConfig;
use crate::lexing::{LexError, TokenStream};
use crate::model::Session;
use std::io;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("failed to start the scanner thread: {0}")]
    Spawn(#[from] io::Error),
}

pub fn parse(source: &str) -> Result<Session, ParseError> {
    let session = SessionBuilder::new().build(TokenStream::new(source))?;
    Ok(session)
}

pub fn parse_with_config(source: &str, config: &ParsingConfig) -> Result<Session, ParseError> {
    debug!(backend = ?config.stream, "parsing");
    let stream = TokenStream::from_config(source, config)?;
    let session = SessionBuilder::new().build(stream)?;
    Ok(session)
}
