//! Testing utilities
//!
//!     Traindown documents look simple, which makes it easy to write a test input that is
//!     slightly off (a missing colon, a suffix glued to the wrong token) and end up tuning
//!     the parser to the wrong thing. Two rules keep tests honest:
//!
//!         1. Prefer verified sample documents (via [Samples](samples::Samples)).
//!         2. Check parsed sessions with fluent assertions (via [assert_session]).
//!
//!     Short inline documents are fine for scanner edge cases and single-token behavior,
//!     where the point of the test is the exact text.
//!
//! Samples
//!
//!     ```rust,ignore
//!     use traindown::testing::{Sample, Samples};
//!
//!     let session = Samples::parse(Sample::Basic);
//!     let tokens = Samples::get(Sample::KitchenSink).tokenize();
//!     let formatted = Samples::get(Sample::Supersets).format();
//!     ```
//!
//! Assertions
//!
//!     ```rust,ignore
//!     use traindown::testing::assert_session;
//!
//!     assert_session(&session)
//!         .movement_count(1)
//!         .movement(0, |m| {
//!             m.name("squat").performance(2, |p| {
//!                 p.load(120.0).reps(3).sets(2);
//!             });
//!         });
//!     ```
//!
//!     Failure messages name the element that failed, e.g. `movements[0]:performances[2]`.

pub mod assertions;
pub mod matchers;
pub mod samples;

pub use assertions::{assert_session, MovementAssertion, PerformanceAssertion, SessionAssertion};
pub use matchers::TextMatch;
pub use samples::{Sample, SampleLoader, Samples};
