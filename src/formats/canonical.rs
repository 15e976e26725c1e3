//! Canonical formatter
//!
//!     Rewrites a document into its canonical layout straight from the token stream, so
//!     values keep their source spelling (including ones the parser would reject).
//!
//!         @ 2020-01-01
//!         # unit: kg
//!
//!         squat:
//!           # rest: 90s
//!           100 5r 3s
//!             * felt heavy
//!
//!         + 'bw row:
//!           bw+10 8r
//!
//!     Session metadata and notes are not indented, movement metadata and notes and
//!     performance lines take the movement indent, performance metadata and notes take the
//!     performance indent. Performance suffixes are written fails, reps, sets; a suffix
//!     given twice keeps its last value. Lines are joined with the configured line ending,
//!     with no terminator after the last one.
//!
//!     Formatting is idempotent: formatting the output again yields the same text.

use crate::config::FormattingConfig;
use crate::lexing::{LexError, Scanner};
use crate::parsing::Context;
use crate::token::{Token, TokenKind};

/// Format with the default layout.
pub fn format(source: &str) -> Result<String, LexError> {
    format_with(source, &FormattingConfig::default())
}

pub fn format_with(source: &str, config: &FormattingConfig) -> Result<String, LexError> {
    format_tokens(Scanner::new(source), config)
}

pub fn format_tokens<I>(tokens: I, config: &FormattingConfig) -> Result<String, LexError>
where
    I: IntoIterator<Item = Result<Token, LexError>>,
{
    let mut writer = CanonicalWriter::new(config);
    for token in tokens {
        writer.push(token?);
    }
    Ok(writer.finish())
}

/// Escape a movement name that would otherwise scan as something else.
///
/// An empty name keeps its marker, since a bare `:` line does not scan.
pub fn escape_movement_name(name: &str) -> String {
    let mut chars = name.chars();
    let needs_escape = match chars.next() {
        None => true,
        Some(first) if !first.is_alphabetic() => true,
        Some(first) => matches!(first, 'b' | 'B') && matches!(chars.next(), Some('w' | 'W')),
    };

    if needs_escape {
        format!("'{name}")
    } else {
        name.to_string()
    }
}

#[derive(Debug, Default)]
struct PerformanceLine {
    load: Option<String>,
    fails: Option<String>,
    reps: Option<String>,
    sets: Option<String>,
}

impl PerformanceLine {
    fn render(&self) -> String {
        let suffixed = [(&self.fails, 'f'), (&self.reps, 'r'), (&self.sets, 's')]
            .into_iter()
            .filter_map(|(value, suffix)| value.as_ref().map(|v| format!("{v}{suffix}")));

        self.load
            .iter()
            .cloned()
            .chain(suffixed)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

struct CanonicalWriter<'c> {
    config: &'c FormattingConfig,
    lines: Vec<String>,
    context: Context,
    pending_key: Option<String>,
    performance: Option<PerformanceLine>,
    load_seen: bool,
}

impl<'c> CanonicalWriter<'c> {
    fn new(config: &'c FormattingConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
            context: Context::InSessionHeader,
            pending_key: None,
            performance: None,
            load_seen: false,
        }
    }

    fn push(&mut self, token: Token) {
        let value = token.value.trim();

        match token.kind {
            TokenKind::DateTime => {
                self.flush_performance();
                self.lines.push(format!("@ {value}"));
            }
            TokenKind::MetaKey => {
                self.flush_performance();
                self.pending_key = Some(value.to_string());
            }
            TokenKind::MetaValue => {
                let key = self.pending_key.take().unwrap_or_default();
                let line = format!("{}# {key}: {value}", self.indent());
                self.lines.push(line);
            }
            TokenKind::Note => {
                self.flush_performance();
                // Notes keep their ragged right edge.
                let line = format!("{}* {}", self.indent(), token.value);
                self.lines.push(line);
            }
            TokenKind::Movement | TokenKind::SupersetMovement => {
                self.flush_performance();
                if self.config.blank_line_before_movement && !self.lines.is_empty() {
                    self.lines.push(String::new());
                }
                let marker = if token.kind == TokenKind::SupersetMovement {
                    "+ "
                } else {
                    ""
                };
                self.lines
                    .push(format!("{marker}{}:", escape_movement_name(value)));
                self.context = Context::InMovementHeader;
                self.load_seen = false;
            }
            TokenKind::Load => {
                // Until the movement's first load, stray suffixes wait on the line for it.
                if self.load_seen {
                    self.flush_performance();
                }
                self.performance_mut().load = Some(value.to_string());
                self.load_seen = true;
                self.context = Context::InPerformance;
            }
            TokenKind::Fails => self.performance_mut().fails = Some(value.to_string()),
            TokenKind::Reps => self.performance_mut().reps = Some(value.to_string()),
            TokenKind::Sets => self.performance_mut().sets = Some(value.to_string()),
        }
    }

    fn finish(mut self) -> String {
        self.flush_performance();
        self.lines.join(&self.config.line_ending)
    }

    fn performance_mut(&mut self) -> &mut PerformanceLine {
        self.performance.get_or_insert_with(Default::default)
    }

    fn flush_performance(&mut self) {
        if let Some(performance) = self.performance.take() {
            let line = format!("{}{}", self.config.movement_indent, performance.render());
            self.lines.push(line);
        }
    }

    fn indent(&self) -> &str {
        match self.context {
            Context::InSessionHeader => "",
            Context::InMovementHeader => &self.config.movement_indent,
            Context::InPerformance => &self.config.performance_indent,
        }
    }
}
