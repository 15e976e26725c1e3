//! Domain model
//!
//!     A parse produces one [Session] holding ordered [Movement]s, each holding ordered
//!     [Performance]s. Every level carries free-form metadata and notes; see [Scope] for the
//!     shared behavior, including the unit directive.
//!
//! Units
//!
//!     A performance's unit resolves, in order, from its own `# unit:` directive, its
//!     movement's default unit, then the session's default unit. When none is set it stays
//!     `None`, and volume queries report it under [UNKNOWN_UNIT].

pub mod diagnostics;
pub mod metadata;
pub mod movement;
pub mod performance;
pub mod session;
pub mod volume;

pub use diagnostics::{NumericField, SemanticError};
pub use metadata::{is_unit_directive, Metadata, Scope};
pub use movement::Movement;
pub use performance::Performance;
pub use session::Session;
pub use volume::{Volume, Volumes, UNKNOWN_UNIT};
