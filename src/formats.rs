//! Output formats
//!
//!     Everything a document can be turned into:
//!
//!     - `canonical`: the document rewritten in canonical layout ([canonical]).
//!     - `json`, `yaml`: the parsed [Session](crate::model::Session).
//!     - `token-simple`, `token-json`: the raw token stream, for debugging the scanner.
//!     - `volumes`: total volume per unit.
//!
//!     [process] runs a source through the pipeline a format needs and returns the rendered
//!     text along with any non-fatal errors the parse recorded.

pub mod canonical;
pub mod serialized;

use crate::config::TraindownConfig;
use crate::lexing::{tokenize, LexError};
use crate::model::SemanticError;
use crate::parsing::{parse_with_config, ParseError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Canonical,
    Json,
    Yaml,
    TokenSimple,
    TokenJson,
    Volumes,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Canonical,
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::TokenSimple,
        OutputFormat::TokenJson,
        OutputFormat::Volumes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Canonical => "canonical",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::TokenSimple => "token-simple",
            OutputFormat::TokenJson => "token-json",
            OutputFormat::Volumes => "volumes",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Canonical => "Document rewritten in canonical layout",
            OutputFormat::Json => "Parsed session as JSON",
            OutputFormat::Yaml => "Parsed session as YAML",
            OutputFormat::TokenSimple => "One [Kind] value line per token",
            OutputFormat::TokenJson => "Tokens with their source ranges as JSON",
            OutputFormat::Volumes => "Total volume per unit",
        }
    }

    /// Names of every format, in listing order.
    pub fn available() -> Vec<&'static str> {
        Self::ALL.iter().map(OutputFormat::name).collect()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| ProcessingError::UnknownFormat(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("unknown format '{0}'")]
    UnknownFormat(String),

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Rendered output plus the non-fatal errors found on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutput {
    pub text: String,
    pub errors: Vec<SemanticError>,
}

impl ProcessOutput {
    fn text(text: String) -> Self {
        Self {
            text,
            errors: Vec::new(),
        }
    }
}

pub fn process(
    source: &str,
    format: OutputFormat,
    config: &TraindownConfig,
) -> Result<ProcessOutput, ProcessingError> {
    let pretty = config.output.pretty;

    let output = match format {
        OutputFormat::Canonical => {
            ProcessOutput::text(canonical::format_with(source, &config.formatting)?)
        }
        OutputFormat::TokenSimple => {
            ProcessOutput::text(serialized::tokens_simple(&tokenize(source)?))
        }
        OutputFormat::TokenJson => {
            ProcessOutput::text(serialized::tokens_json(&tokenize(source)?, pretty)?)
        }
        OutputFormat::Json | OutputFormat::Yaml | OutputFormat::Volumes => {
            let session = parse_with_config(source, &config.parsing)?;
            let text = match format {
                OutputFormat::Json => serialized::session_json(&session, pretty)?,
                OutputFormat::Yaml => serialized::session_yaml(&session)?,
                _ => serialized::volumes(&session.volumes()),
            };
            ProcessOutput {
                text,
                errors: session.errors,
            }
        }
    };

    Ok(output)
}

pub fn process_file(
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &TraindownConfig,
) -> Result<ProcessOutput, ProcessingError> {
    let source = fs::read_to_string(path)?;
    process(&source, format, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_round_trip() {
        for name in OutputFormat::available() {
            let format: OutputFormat = name.parse().expect("known format");
            assert_eq!(format.name(), name);
        }
    }

    #[test]
    fn test_unknown_format() {
        let err = "xml".parse::<OutputFormat>().expect_err("should fail");
        assert!(err.to_string().starts_with("unknown format 'xml'"));
    }

    #[test]
    fn test_process_reports_semantic_errors() {
        let config = TraindownConfig::default();
        let output =
            process("squat:\n100 ten", OutputFormat::Volumes, &config).expect_err("lex error");
        assert!(matches!(output, ProcessingError::Parse(_)));

        let output = process("squat:\n100 1.5r", OutputFormat::Volumes, &config)
            .expect("process failed");
        assert_eq!(output.text, "unknown unit: 100");
        assert_eq!(output.errors.len(), 1);
    }

    #[test]
    fn test_token_formats_skip_parsing() {
        let config = TraindownConfig::default();
        let output = process("@ Thursday", OutputFormat::TokenSimple, &config)
            .expect("process failed");
        assert_eq!(output.text, "[Date / Time] Thursday");
        assert!(output.errors.is_empty());
    }

    #[test]
    fn test_process_file_reads_samples() {
        let config = TraindownConfig::default();
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/units.traindown");
        let output = process_file(path, OutputFormat::Volumes, &config).expect("process failed");
        assert_eq!(output.text, "your: 2000");
        assert!(output.errors.is_empty());
    }

    #[test]
    fn test_process_file_missing_path() {
        let config = TraindownConfig::default();
        let err = process_file("/nonexistent/session.traindown", OutputFormat::Json, &config)
            .expect_err("missing file");
        assert!(matches!(err, ProcessingError::Io(_)));
    }
}
