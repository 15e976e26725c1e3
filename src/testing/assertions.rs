//! Fluent assertions over a parsed [Session]
//!
//!     Every assertion returns `self` so checks chain, and nested closures drill into
//!     movements and performances. Failure messages carry a path such as
//!     `movements[1]:performances[0]` so the failing element is easy to locate.

use super::matchers::TextMatch;
use crate::model::{Metadata, Movement, Performance, Session};
use chrono::{DateTime, Utc};

pub fn assert_session(session: &Session) -> SessionAssertion<'_> {
    SessionAssertion { session }
}

fn summarize_movements(movements: &[Movement]) -> String {
    movements
        .iter()
        .map(|m| format!("{}({})", m.name, m.performances.len()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn assert_metadata(metadata: &Metadata, key: &str, expected: &str, context: &str) {
    match metadata.get(key) {
        Some(actual) => assert_eq!(
            actual, expected,
            "{context}: expected metadata '{key}' to be '{expected}', but got '{actual}'"
        ),
        None => panic!(
            "{context}: expected metadata key '{key}', found keys: [{}]",
            metadata.keys().cloned().collect::<Vec<_>>().join(", ")
        ),
    }
}

fn assert_unit(actual: Option<&str>, expected: Option<&str>, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: expected unit {expected:?}, but got {actual:?}"
    );
}

pub struct SessionAssertion<'a> {
    session: &'a Session,
}

impl<'a> SessionAssertion<'a> {
    pub fn date(self, expected: DateTime<Utc>) -> Self {
        assert_eq!(
            self.session.date,
            Some(expected),
            "Expected session date {expected}, but got {:?}",
            self.session.date
        );
        self
    }

    pub fn no_date(self) -> Self {
        assert!(
            self.session.date.is_none(),
            "Expected no session date, but got {:?}",
            self.session.date
        );
        self
    }

    pub fn default_unit(self, expected: Option<&str>) -> Self {
        assert_unit(self.session.default_unit.as_deref(), expected, "session");
        self
    }

    pub fn metadata(self, key: &str, expected: &str) -> Self {
        assert_metadata(&self.session.metadata, key, expected, "session");
        self
    }

    pub fn metadata_count(self, expected: usize) -> Self {
        let actual = self.session.metadata.len();
        assert_eq!(
            actual, expected,
            "Expected {expected} session metadata entries, found {actual}: {:?}",
            self.session.metadata
        );
        self
    }

    pub fn notes(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.session.notes, expected,
            "Expected session notes {expected:?}, but got {:?}",
            self.session.notes
        );
        self
    }

    pub fn error_count(self, expected: usize) -> Self {
        let actual = self.session.errors.len();
        assert_eq!(
            actual, expected,
            "Expected {expected} errors, found {actual}: {:?}",
            self.session.errors
        );
        self
    }

    pub fn volume(self, unit: &str, expected: f64) -> Self {
        let volumes = self.session.volumes();
        let actual = volumes.get(unit).copied();
        assert_eq!(
            actual,
            Some(expected),
            "Expected {expected} volume for '{unit}', found volumes: {volumes:?}"
        );
        self
    }

    pub fn movement_count(self, expected: usize) -> Self {
        let actual = self.session.movements.len();
        assert_eq!(
            actual,
            expected,
            "Expected {expected} movements, found {actual}: [{}]",
            summarize_movements(&self.session.movements)
        );
        self
    }

    pub fn movement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(MovementAssertion<'a>),
    {
        let movements = &self.session.movements;
        assert!(
            index < movements.len(),
            "Movement index {index} out of bounds (session has {} movements: [{}])",
            movements.len(),
            summarize_movements(movements)
        );
        assertion(MovementAssertion {
            movement: &movements[index],
            context: format!("movements[{index}]"),
        });
        self
    }
}

pub struct MovementAssertion<'a> {
    movement: &'a Movement,
    context: String,
}

impl<'a> MovementAssertion<'a> {
    pub fn name(self, expected: impl Into<TextMatch>) -> Self {
        expected.into().assert(&self.movement.name, &self.context);
        self
    }

    pub fn sequence(self, expected: usize) -> Self {
        assert_eq!(
            self.movement.sequence, expected,
            "{}: expected sequence {expected}, but got {}",
            self.context, self.movement.sequence
        );
        self
    }

    pub fn super_set(self, expected: bool) -> Self {
        assert_eq!(
            self.movement.super_set, expected,
            "{}: expected super_set to be {expected}",
            self.context
        );
        self
    }

    pub fn default_unit(self, expected: Option<&str>) -> Self {
        assert_unit(
            self.movement.default_unit.as_deref(),
            expected,
            &self.context,
        );
        self
    }

    pub fn metadata(self, key: &str, expected: &str) -> Self {
        assert_metadata(&self.movement.metadata, key, expected, &self.context);
        self
    }

    pub fn notes(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.movement.notes, expected,
            "{}: expected notes {expected:?}, but got {:?}",
            self.context, self.movement.notes
        );
        self
    }

    pub fn performance_count(self, expected: usize) -> Self {
        let actual = self.movement.performances.len();
        assert_eq!(
            actual, expected,
            "{}: expected {expected} performances, found {actual}",
            self.context
        );
        self
    }

    pub fn performance<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(PerformanceAssertion<'a>),
    {
        let performances = &self.movement.performances;
        assert!(
            index < performances.len(),
            "{}: performance index {index} out of bounds (movement has {} performances)",
            self.context,
            performances.len()
        );
        assertion(PerformanceAssertion {
            performance: &performances[index],
            context: format!("{}:performances[{index}]", self.context),
        });
        self
    }
}

pub struct PerformanceAssertion<'a> {
    performance: &'a Performance,
    context: String,
}

impl PerformanceAssertion<'_> {
    pub fn load(self, expected: f64) -> Self {
        assert_eq!(
            self.performance.load, expected,
            "{}: expected load {expected}, but got {}",
            self.context, self.performance.load
        );
        self
    }

    pub fn fails(self, expected: u32) -> Self {
        assert_eq!(
            self.performance.fails, expected,
            "{}: expected {expected} fails, but got {}",
            self.context, self.performance.fails
        );
        self
    }

    pub fn reps(self, expected: u32) -> Self {
        assert_eq!(
            self.performance.reps, expected,
            "{}: expected {expected} reps, but got {}",
            self.context, self.performance.reps
        );
        self
    }

    pub fn sets(self, expected: u32) -> Self {
        assert_eq!(
            self.performance.sets, expected,
            "{}: expected {expected} sets, but got {}",
            self.context, self.performance.sets
        );
        self
    }

    pub fn unit(self, expected: Option<&str>) -> Self {
        assert_unit(self.performance.unit.as_deref(), expected, &self.context);
        self
    }

    pub fn bodyweight(self, expected: bool) -> Self {
        assert_eq!(
            self.performance.bodyweight, expected,
            "{}: expected bodyweight to be {expected}",
            self.context
        );
        self
    }

    pub fn sequence(self, expected: usize) -> Self {
        assert_eq!(
            self.performance.sequence, expected,
            "{}: expected sequence {expected}, but got {}",
            self.context, self.performance.sequence
        );
        self
    }

    pub fn metadata(self, key: &str, expected: &str) -> Self {
        assert_metadata(&self.performance.metadata, key, expected, &self.context);
        self
    }

    pub fn notes(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.performance.notes, expected,
            "{}: expected notes {expected:?}, but got {:?}",
            self.context, self.performance.notes
        );
        self
    }
}
