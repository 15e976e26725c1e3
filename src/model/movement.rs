//! A named exercise within a session.

use super::metadata::{Metadata, Scope};
use super::performance::Performance;
use super::volume::{self, Volumes};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_unit: Option<String>,
    pub sequence: usize,
    /// Marked with a leading `+`: performed back-to-back with the previous movement.
    pub super_set: bool,
    pub performances: Vec<Performance>,
    pub metadata: Metadata,
    pub notes: Vec<String>,
}

impl Movement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Volume per unit across all performances.
    pub fn volumes(&self) -> Volumes {
        let mut volumes = Volumes::new();
        for performance in &self.performances {
            let volume = performance.volume();
            volume::add(&mut volumes, volume.unit_key(), volume.amount);
        }
        volumes
    }
}

impl Scope for Movement {
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
