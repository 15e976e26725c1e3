//! Metadata and notes shared by sessions, movements and performances.

use std::collections::BTreeMap;

/// Free-form key/value pairs attached to any level of a session.
pub type Metadata = BTreeMap<String, String>;

/// Keys that override the unit of the current scope instead of being stored.
pub fn is_unit_directive(key: &str) -> bool {
    key.eq_ignore_ascii_case("u") || key.eq_ignore_ascii_case("unit")
}

/// A level of the session tree that metadata and notes attach to.
pub trait Scope {
    fn metadata_mut(&mut self) -> &mut Metadata;

    fn notes_mut(&mut self) -> &mut Vec<String>;

    /// Set the unit this scope hands down (or, for a performance, its own unit).
    fn set_unit(&mut self, unit: String);

    /// Apply a special directive. Returns false when `key` is ordinary metadata.
    fn assign_special(&mut self, key: &str, value: &str) -> bool {
        if is_unit_directive(key) {
            self.set_unit(value.to_string());
            return true;
        }
        false
    }

    /// Record a metadata pair, overwriting any earlier value for the key.
    fn annotate(&mut self, key: &str, value: &str) {
        if !self.assign_special(key, value) {
            self.metadata_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    fn add_note(&mut self, note: String) {
        self.notes_mut().push(note);
    }
}
