//! Matching rules for the free text a session carries
//!
//!     Movement names, notes and metadata values keep the spelling the lifter typed, so a
//!     test often only cares about part of it. `"squat"` converts into an exact match;
//!     `IgnoreCase` is there for names like `Bench Press` that logs spell both ways.

#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    IgnoreCase(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::IgnoreCase(expected) => actual.to_lowercase() == expected.to_lowercase(),
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
        }
    }

    /// Panic with `context` (an element path such as `movements[1]`) when `actual` does not
    /// match.
    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{context}: expected {}, but got '{actual}'",
            self.expectation()
        );
    }

    fn expectation(&self) -> String {
        match self {
            TextMatch::Exact(expected) => format!("'{expected}'"),
            TextMatch::IgnoreCase(expected) => format!("'{expected}' in any case"),
            TextMatch::StartsWith(prefix) => format!("text starting with '{prefix}'"),
            TextMatch::Contains(substring) => format!("text containing '{substring}'"),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(expected: &str) -> Self {
        TextMatch::Exact(expected.to_string())
    }
}
