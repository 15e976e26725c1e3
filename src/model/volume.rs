//! Training volume: `(reps - fails) * sets * load`, aggregated by unit.

use std::collections::BTreeMap;

/// Key used in [Volumes] for performances whose unit never resolved.
pub const UNKNOWN_UNIT: &str = "unknown unit";

/// Summed volume per unit.
pub type Volumes = BTreeMap<String, f64>;

/// The volume of a single performance together with its resolved unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume<'a> {
    pub amount: f64,
    pub unit: Option<&'a str>,
}

impl Volume<'_> {
    pub fn unit_key(&self) -> &str {
        self.unit.unwrap_or(UNKNOWN_UNIT)
    }
}

pub(crate) fn add(volumes: &mut Volumes, unit: &str, amount: f64) {
    *volumes.entry(unit.to_string()).or_insert(0.0) += amount;
}

pub(crate) fn merge(into: &mut Volumes, other: Volumes) {
    for (unit, amount) in other {
        add(into, &unit, amount);
    }
}
