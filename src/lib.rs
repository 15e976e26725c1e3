//! # traindown
//!
//! A parser and formatter for the traindown training log format.
//!
//! File Layout
//!
//!     The crate follows the pipeline a document goes through:
//!
//!     src/
//!       ├── range.rs      Byte offset to line:column conversion
//!       ├── token.rs      Token kinds and emitted tokens
//!       ├── lexing        Rune cursor, scanner state machine and token streams
//!       ├── parsing       Session builder, value and date interpretation
//!       ├── model         Session / Movement / Performance and volume queries
//!       ├── formats       Canonical formatter and serialized outputs
//!       ├── config.rs     Layered configuration with embedded defaults
//!       └── testing       Fluent assertions and verified sample documents
//!
//!     text → Scanner → TokenStream → SessionBuilder → Session
//!
//! For testing guidelines, see the [testing module](crate::testing).

pub mod config;
pub mod formats;
pub mod lexing;
pub mod model;
pub mod parsing;
pub mod range;
pub mod testing;
pub mod token;

pub use formats::canonical::format;
pub use lexing::{LexError, TokenStream};
pub use model::{Metadata, Movement, Performance, Session, Volume};
pub use parsing::{parse, ParseError, SemanticError, SessionBuilder};
pub use token::{Token, TokenKind};
