//! Interpretation of numeric token values.

/// A load as written: a plain number or a bodyweight expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadLiteral {
    Numeric(f64),
    /// `bw`, `bw+25`, `BW-10`. The modifier is what gets recorded as the load.
    Bodyweight { modifier: f64 },
}

impl LoadLiteral {
    pub fn amount(&self) -> f64 {
        match self {
            LoadLiteral::Numeric(load) => *load,
            LoadLiteral::Bodyweight { modifier } => *modifier,
        }
    }

    pub fn is_bodyweight(&self) -> bool {
        matches!(self, LoadLiteral::Bodyweight { .. })
    }
}

pub fn parse_load(value: &str) -> Option<LoadLiteral> {
    let value = value.trim();

    if let Some(rest) = strip_bodyweight(value) {
        let modifier = match rest.chars().next() {
            None => 0.0,
            Some('+' | '-') => parse_finite(rest)?,
            Some(_) => return None,
        };
        return Some(LoadLiteral::Bodyweight { modifier });
    }

    parse_finite(value).map(LoadLiteral::Numeric)
}

/// A non-negative whole count, as used by fails, reps and sets.
pub fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

fn strip_bodyweight(value: &str) -> Option<&str> {
    let prefix = value.get(..2)?;
    prefix
        .eq_ignore_ascii_case("bw")
        .then(|| &value[2..])
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}
