//! A single logged set or attempt of a movement.

use super::metadata::{Metadata, Scope};
use super::volume::{self, Volume, Volumes};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub load: f64,
    pub fails: u32,
    pub reps: u32,
    pub sets: u32,
    /// `None` until a unit is set explicitly or inherited.
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_of_max: Option<f64>,
    /// The load was written as a bodyweight literal (`bw`, `bw+25`).
    pub bodyweight: bool,
    pub sequence: usize,
    pub metadata: Metadata,
    pub notes: Vec<String>,
}

impl Default for Performance {
    fn default() -> Self {
        Self {
            load: 0.0,
            fails: 0,
            reps: 1,
            sets: 1,
            unit: None,
            percent_of_max: None,
            bodyweight: false,
            sequence: 0,
            metadata: Metadata::new(),
            notes: Vec::new(),
        }
    }
}

impl Performance {
    pub fn volume(&self) -> Volume<'_> {
        let effective_reps = f64::from(self.reps) - f64::from(self.fails);
        Volume {
            amount: effective_reps * f64::from(self.sets) * self.load,
            unit: self.unit.as_deref(),
        }
    }

    /// Fill in the unit from the enclosing movement, then the session, if none was set.
    pub fn resolve_unit(&mut self, movement_default: Option<&str>, session_default: Option<&str>) {
        if self.unit.is_none() {
            self.unit = movement_default.or(session_default).map(str::to_string);
        }
    }

    /// This performance's volume as a single-entry map.
    pub fn volumes(&self) -> Volumes {
        let volume = self.volume();
        let mut volumes = Volumes::new();
        volume::add(&mut volumes, volume.unit_key(), volume.amount);
        volumes
    }
}

impl Scope for Performance {
    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn notes_mut(&mut self) -> &mut Vec<String> {
        &mut self.notes
    }

    fn set_unit(&mut self, unit: String) {
        self.unit = Some(unit);
    }
}
