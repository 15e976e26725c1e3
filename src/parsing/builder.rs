//! Session builder
//!
//!     Folds a token stream into a [Session]. The builder holds one in-flight [Movement] and
//!     one in-flight [Performance]; they are appended to their parent when the next sibling
//!     starts or the stream ends. Where metadata and notes land is decided by [Context].
//!
//! Finalizing
//!
//!     A performance exists once a load was seen for it. Fails, reps and sets written
//!     before any load are kept on the in-flight performance and carry over to the next
//!     load. A movement is appended only when it has a name; performances seen before the
//!     first movement header end up on that movement.
//!
//! Errors
//!
//!     Values that cannot be interpreted are recorded as [SemanticError]s on the session and
//!     the affected field keeps its default. Only lexical errors stop the build.

use super::dates::parse_date;
use super::values::{parse_count, parse_load};
use crate::lexing::LexError;
use crate::model::{Movement, NumericField, Performance, Scope, SemanticError, Session};
use crate::token::{Token, TokenKind};
use chrono::{DateTime, Utc};
use std::mem;
use tracing::{debug, warn};

/// The level of the session that metadata and notes currently attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    #[default]
    InSessionHeader,
    InMovementHeader,
    InPerformance,
}

pub struct SessionBuilder {
    session: Session,
    movement: Movement,
    performance: Performance,
    context: Context,
    load_seen: bool,
    movement_sequence: usize,
    performance_sequence: usize,
    pending_key: Option<String>,
    clock: fn() -> DateTime<Utc>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            movement: Movement::default(),
            performance: Performance::default(),
            context: Context::default(),
            load_seen: false,
            movement_sequence: 0,
            performance_sequence: 0,
            pending_key: None,
            clock: Utc::now,
        }
    }

    /// Replace the clock used as the session date when the date line is unreadable.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn context(&self) -> Context {
        self.context
    }

    /// Consume a whole stream. Stops at the first lexical error.
    pub fn build<I>(mut self, tokens: I) -> Result<Session, LexError>
    where
        I: IntoIterator<Item = Result<Token, LexError>>,
    {
        for token in tokens {
            self.push(token?);
        }
        Ok(self.finish())
    }

    pub fn push(&mut self, token: Token) {
        match token.kind {
            TokenKind::DateTime => self.date(&token),
            TokenKind::MetaKey => {
                self.pending_key = Some(token.value.trim().to_string());
            }
            TokenKind::MetaValue => {
                let key = self.pending_key.take().unwrap_or_default();
                self.scope_mut().annotate(&key, token.value.trim());
            }
            TokenKind::Note => self.scope_mut().add_note(token.value),
            TokenKind::Load => self.load(&token),
            TokenKind::Fails => self.count(&token, NumericField::Fails),
            TokenKind::Reps => self.count(&token, NumericField::Reps),
            TokenKind::Sets => self.count(&token, NumericField::Sets),
            TokenKind::Movement => self.start_movement(&token, false),
            TokenKind::SupersetMovement => self.start_movement(&token, true),
        }
    }

    /// Append whatever is still in flight and hand over the session.
    pub fn finish(mut self) -> Session {
        self.flush_performance();
        self.flush_movement();

        debug!(
            movements = self.session.movements.len(),
            errors = self.session.errors.len(),
            "session built"
        );
        self.session
    }

    fn date(&mut self, token: &Token) {
        match parse_date(&token.value) {
            Some(date) => self.session.date = Some(date),
            None => {
                self.session.date = Some((self.clock)());
                self.record(SemanticError::InvalidDate {
                    value: token.value.trim().to_string(),
                    position: token.range.start,
                });
            }
        }
    }

    fn load(&mut self, token: &Token) {
        self.flush_performance();
        self.load_seen = true;
        self.context = Context::InPerformance;

        match parse_load(&token.value) {
            Some(literal) => {
                self.performance.load = literal.amount();
                self.performance.bodyweight = literal.is_bodyweight();
            }
            None => self.record(SemanticError::InvalidNumber {
                field: NumericField::Load,
                value: token.value.clone(),
                position: token.range.start,
            }),
        }
    }

    fn count(&mut self, token: &Token, field: NumericField) {
        let Some(count) = parse_count(&token.value) else {
            self.record(SemanticError::InvalidNumber {
                field,
                value: token.value.clone(),
                position: token.range.start,
            });
            return;
        };

        let slot = match field {
            NumericField::Fails => &mut self.performance.fails,
            NumericField::Reps => &mut self.performance.reps,
            NumericField::Sets => &mut self.performance.sets,
            NumericField::Load => return,
        };
        *slot = count;
    }

    fn start_movement(&mut self, token: &Token, super_set: bool) {
        self.flush_performance();
        self.flush_movement();

        self.movement.name = token.value.trim().to_string();
        self.movement.super_set = super_set;
        self.context = Context::InMovementHeader;
    }

    fn flush_performance(&mut self) {
        if !mem::take(&mut self.load_seen) {
            return;
        }

        let mut performance = mem::take(&mut self.performance);
        performance.resolve_unit(
            self.movement.default_unit.as_deref(),
            self.session.default_unit.as_deref(),
        );
        performance.sequence = self.performance_sequence;
        self.performance_sequence += 1;

        debug!(
            movement = %self.movement.name,
            sequence = performance.sequence,
            load = performance.load,
            "performance finalized"
        );
        self.movement.performances.push(performance);
    }

    // An unnamed movement stays in flight so the next header can claim its performances.
    fn flush_movement(&mut self) {
        if self.movement.name.is_empty() {
            return;
        }

        let mut movement = mem::take(&mut self.movement);
        movement.sequence = self.movement_sequence;
        self.movement_sequence += 1;
        self.performance_sequence = 0;

        debug!(
            name = %movement.name,
            sequence = movement.sequence,
            performances = movement.performances.len(),
            "movement finalized"
        );
        self.session.movements.push(movement);
    }

    fn scope_mut(&mut self) -> &mut dyn Scope {
        match self.context {
            Context::InSessionHeader => &mut self.session,
            Context::InMovementHeader => &mut self.movement,
            Context::InPerformance => &mut self.performance,
        }
    }

    fn record(&mut self, error: SemanticError) {
        warn!(%error, "recoverable parse error");
        self.session.errors.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::Scanner;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
            .single()
            .expect("valid date")
    }

    fn build(source: &str) -> Session {
        SessionBuilder::new()
            .with_clock(fixed_clock)
            .build(Scanner::new(source))
            .expect("lexing failed")
    }

    #[test]
    fn test_context_follows_tokens() {
        let mut builder = SessionBuilder::new();
        let mut tokens = Scanner::new("squat:\n100").map(|t| t.expect("lexing failed"));

        assert_eq!(builder.context(), Context::InSessionHeader);
        builder.push(tokens.next().expect("movement token"));
        assert_eq!(builder.context(), Context::InMovementHeader);
        builder.push(tokens.next().expect("load token"));
        assert_eq!(builder.context(), Context::InPerformance);
    }

    #[test]
    fn test_sequences() {
        let session = build("a:\n1\n2\n3\nb:\n4\n5\nc:\n6");

        let movement_sequences: Vec<usize> =
            session.movements.iter().map(|m| m.sequence).collect();
        assert_eq!(movement_sequences, vec![0, 1, 2]);

        let performance_sequences: Vec<Vec<usize>> = session
            .movements
            .iter()
            .map(|m| m.performances.iter().map(|p| p.sequence).collect())
            .collect();
        assert_eq!(
            performance_sequences,
            vec![vec![0, 1, 2], vec![0, 1], vec![0]]
        );
    }

    #[test]
    fn test_zero_load_is_still_a_performance() {
        let session = build("plank:\n0");
        assert_eq!(session.movements[0].performances.len(), 1);
        assert_eq!(session.movements[0].performances[0].load, 0.0);
    }

    #[test]
    fn test_metadata_lands_in_current_context() {
        let session = build(
            "# coach: sam\nsquat:\n# rest: 90s\n100\n# rpe: 8\n* grindy\n110\n* easy",
        );

        assert_eq!(session.metadata["coach"], "sam");
        let squat = &session.movements[0];
        assert_eq!(squat.metadata["rest"], "90s");
        assert_eq!(squat.performances[0].metadata["rpe"], "8");
        assert_eq!(squat.performances[0].notes, vec!["grindy"]);
        assert_eq!(squat.performances[1].notes, vec!["easy"]);
    }

    #[test]
    fn test_unit_inheritance() {
        let session = build(
            "# unit: lb\nsquat:\n100\n# unit: kg\n110\nbench:\n# u: stone\n10\n",
        );

        let squat = &session.movements[0];
        // The directive after `100` belongs to that performance.
        assert_eq!(squat.performances[0].unit.as_deref(), Some("kg"));
        assert_eq!(squat.performances[1].unit.as_deref(), Some("lb"));
        assert_eq!(
            session.movements[1].performances[0].unit.as_deref(),
            Some("stone")
        );
        assert!(session.metadata.is_empty());
        assert_eq!(session.default_unit.as_deref(), Some("lb"));
    }

    #[test]
    fn test_bad_reps_is_recorded_and_defaulted() {
        let session = build("squat:\n100 100.5r");

        assert_eq!(session.errors.len(), 1);
        assert!(matches!(
            session.errors[0],
            SemanticError::InvalidNumber {
                field: NumericField::Reps,
                ..
            }
        ));
        assert_eq!(session.movements[0].performances[0].reps, 1);
    }

    #[test]
    fn test_bad_date_falls_back_to_clock() {
        let session = build("@ Thursday\nsquat:\n100");
        assert_eq!(session.date, Some(fixed_clock()));
        assert_eq!(session.errors.len(), 1);
    }

    #[test]
    fn test_bodyweight() {
        let session = build("pullup:\nbw 10r\nbw+25 5r");
        let performances = &session.movements[0].performances;
        assert!(performances[0].bodyweight);
        assert_eq!(performances[0].load, 0.0);
        assert_eq!(performances[1].load, 25.0);
    }

    #[test]
    fn test_suffixes_before_load_carry_over() {
        let session = build("squat:\n5r 100");
        let performance = &session.movements[0].performances[0];
        assert_eq!(performance.reps, 5);
        assert_eq!(performance.load, 100.0);
    }

    #[test]
    fn test_orphan_performances_join_first_movement() {
        let session = build("100 5r\nsquat:\n200");
        assert_eq!(session.movements.len(), 1);
        let loads: Vec<f64> = session.movements[0]
            .performances
            .iter()
            .map(|p| p.load)
            .collect();
        assert_eq!(loads, vec![100.0, 200.0]);
    }

    #[test]
    fn test_superset_and_trimmed_name() {
        let session = build("squat:\n+  lunge  :\n");
        assert!(!session.movements[0].super_set);
        assert!(session.movements[1].super_set);
        assert_eq!(session.movements[1].name, "lunge");
    }
}
