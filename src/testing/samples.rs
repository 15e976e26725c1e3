//! Verified sample documents
//!
//!     The files under `samples/` are the canonical test inputs. Load them through
//!     [Samples] instead of writing documents inline, so a grammar change only has to be
//!     reflected in one place.

use crate::formats::canonical;
use crate::lexing::tokenize;
use crate::model::Session;
use crate::parsing::parse;
use crate::token::Token;
use std::fs;
use std::path::PathBuf;

const SAMPLES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// One dated movement with a few performances.
    Basic,
    /// Every construct: metadata and notes at all levels, escapes, bodyweight, `;`.
    KitchenSink,
    Supersets,
    /// Two movements inheriting a session unit.
    Units,
    /// Scans cleanly but records non-fatal errors.
    Errors,
}

impl Sample {
    pub const ALL: [Sample; 5] = [
        Sample::Basic,
        Sample::KitchenSink,
        Sample::Supersets,
        Sample::Units,
        Sample::Errors,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Sample::Basic => "basic.traindown",
            Sample::KitchenSink => "kitchen-sink.traindown",
            Sample::Supersets => "supersets.traindown",
            Sample::Units => "units.traindown",
            Sample::Errors => "errors.traindown",
        }
    }
}

/// Entry point for loading samples.
pub struct Samples;

impl Samples {
    pub fn get(sample: Sample) -> SampleLoader {
        SampleLoader { sample }
    }

    pub fn path(sample: Sample) -> PathBuf {
        PathBuf::from(SAMPLES_DIR).join(sample.file_name())
    }

    pub fn source(sample: Sample) -> String {
        Self::get(sample).source()
    }

    pub fn parse(sample: Sample) -> Session {
        Self::get(sample).parse()
    }
}

pub struct SampleLoader {
    sample: Sample,
}

impl SampleLoader {
    pub fn path(&self) -> PathBuf {
        Samples::path(self.sample)
    }

    pub fn source(&self) -> String {
        let path = self.path();
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    pub fn parse(&self) -> Session {
        parse(&self.source())
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", self.sample, e))
    }

    pub fn tokenize(&self) -> Vec<Token> {
        tokenize(&self.source())
            .unwrap_or_else(|e| panic!("Failed to tokenize {:?}: {}", self.sample, e))
    }

    pub fn format(&self) -> String {
        canonical::format(&self.source())
            .unwrap_or_else(|e| panic!("Failed to format {:?}: {}", self.sample, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sample_exists_and_scans() {
        for sample in Sample::ALL {
            assert!(Samples::path(sample).exists(), "missing {sample:?}");
            assert!(!Samples::get(sample).tokenize().is_empty());
        }
    }
}
