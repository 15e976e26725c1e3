//! Configuration loading.
//!
//! `defaults/traindown.default.toml` is embedded into the crate so that docs and runtime
//! behavior stay in sync. Applications layer user files on top of those defaults via
//! [`Loader`] before deserializing into [`TraindownConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/traindown.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct TraindownConfig {
    pub formatting: FormattingConfig,
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
}

/// Knobs for the canonical formatter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormattingConfig {
    pub line_ending: String,
    pub movement_indent: String,
    pub performance_indent: String,
    pub blank_line_before_movement: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            line_ending: "\r\n".to_string(),
            movement_indent: "  ".to_string(),
            performance_indent: "    ".to_string(),
            blank_line_before_movement: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsingConfig {
    pub stream: StreamBackend,
    pub channel_capacity: usize,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            stream: StreamBackend::Lazy,
            channel_capacity: 10,
        }
    }
}

/// How the scanner feeds the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StreamBackend {
    Lazy,
    Channel,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<TraindownConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TraindownConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_match_default_impls() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config, TraindownConfig::default());
    }

    #[test]
    fn loads_default_values() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.formatting.line_ending, "\r\n");
        assert_eq!(config.parsing.stream, StreamBackend::Lazy);
        assert_eq!(config.parsing.channel_capacity, 10);
        assert!(config.output.pretty);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parsing.stream", "channel")
            .expect("override to apply")
            .set_override("formatting.line_ending", "\n")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parsing.stream, StreamBackend::Channel);
        assert_eq!(config.formatting.line_ending, "\n");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[formatting]\nmovement_indent = \"\\t\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.formatting.movement_indent, "\t");
        assert_eq!(config.formatting.performance_indent, "    ");
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/traindown.toml")
            .build()
            .expect("config to build");
        assert_eq!(config, TraindownConfig::default());
    }

    #[test]
    fn required_file_must_exist() {
        let result = Loader::new()
            .with_file("/definitely/not/here/traindown.toml")
            .build();
        assert!(result.is_err());
    }
}
