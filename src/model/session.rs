//! A training session: the result of parsing one document.

use super::diagnostics::SemanticError;
use super::metadata::{Metadata, Scope};
use super::movement::Movement;
use super::volume::{self, Volumes};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// `None` when the document has no date line.
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_unit: Option<String>,
    pub movements: Vec<Movement>,
    pub metadata: Metadata,
    pub notes: Vec<String>,
    /// Non-fatal problems, in the order they were found.
    pub errors: Vec<SemanticError>,
}

impl Session {
    /// Volume per unit across every movement.
    pub fn volumes(&self) -> Volumes {
        let mut volumes = Volumes::new();
        for movement in &self.movements {
            volume::merge(&mut volumes, movement.volumes());
        }
        volumes
    }

    pub fn movement(&self, name: &str) -> Option<&Movement> {
        self.movements.iter().find(|m| m.name == name)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Scope for Session {
    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn notes_mut(&mut self) -> &mut Vec<String> {
        &mut self.notes
    }

    fn set_unit(&mut self, unit: String) {
        self.default_unit = Some(unit);
    }
}
