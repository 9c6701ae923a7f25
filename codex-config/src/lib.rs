//! Shared configuration loader for codex.
//!
//! `defaults/codex.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user files and `CODEX_*`
//! environment variables on top of those defaults via [`Loader`] before
//! deserializing into [`CodexConfig`]. Later layers win:
//!
//! ```text
//! defaults < --config file < CODEX_IDS__NAMESPACE, CODEX_CONVERT__ENRICH, ... < CLI flags
//! ```

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/codex.default.toml");

/// Environment variables `CODEX_<SECTION>__<KEY>` override config keys.
pub const ENV_PREFIX: &str = "CODEX";

/// Top-level configuration consumed by codex applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CodexConfig {
    pub ids: IdsConfig,
    pub convert: ConvertConfig,
}

/// Deterministic id generation.
#[derive(Debug, Clone, Deserialize)]
pub struct IdsConfig {
    pub namespace: String,
    pub length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub format: String,
    pub pretty: bool,
    pub include_unpublished: bool,
    pub enrich: bool,
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

    /// Layer `CODEX_*` environment variables.
    pub fn with_env(self) -> Self {
        self.with_environment(environment())
    }

    fn with_environment(mut self, source: Environment) -> Self {
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `convert.format` from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<CodexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CodexConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.ids.namespace, "codex");
        assert_eq!(config.ids.length, 16);
        assert_eq!(config.convert.format, "foundry");
        assert!(config.convert.pretty);
        assert!(!config.convert.include_unpublished);
        assert!(config.convert.enrich);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("convert.format", "statblock")
            .expect("override to apply")
            .set_override("convert.include_unpublished", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.format, "statblock");
        assert!(config.convert.include_unpublished);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[ids]\nnamespace = \"my-vault\"\n\n[convert]\nenrich = false").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.ids.namespace, "my-vault");
        assert_eq!(config.ids.length, 16);
        assert!(!config.convert.enrich);
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[convert]\nformat = \"statblock\"\npretty = false").unwrap();

        let vars = [
            ("CODEX_CONVERT__FORMAT", "foundry"),
            ("CODEX_IDS__LENGTH", "24"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let config = Loader::new()
            .with_file(file.path())
            .with_environment(environment().source(Some(vars)))
            .build()
            .unwrap();
        assert_eq!(config.convert.format, "foundry");
        assert!(!config.convert.pretty);
        assert_eq!(config.ids.length, 24);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("/nonexistent/codex.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/codex.toml")
            .build()
            .unwrap();
        assert_eq!(config.convert.format, "foundry");
    }
}
