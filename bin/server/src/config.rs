//! Centralized server configuration.
//!
//! Loaded via the `config` crate from an optional TOML file (named by
//! `SPEEZY_CONFIG`) and environment variables, with the environment taking
//! precedence. Nested keys use `__` as separator, so
//! `THEME__ACCOUNT_THEME_IMPLEMENTATION=single-page` sets
//! `theme.account_theme_implementation`.

use serde::Deserialize;
use speezy_theme_core::ThemeOptions;
use std::path::Path;

/// Environment variable naming the optional configuration file.
pub const CONFIG_FILE_ENV: &str = "SPEEZY_CONFIG";

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// Theme packaging options.
    #[serde(default)]
    pub theme: ThemeOptions,

    /// Whether the `/preview` routes serve mock pages.
    /// Off by default; meant for local theme development.
    #[serde(default)]
    pub preview_enabled: bool,
}

impl ServerConfig {
    /// Loads configuration from `SPEEZY_CONFIG` (if set) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value is invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        let file = std::env::var(CONFIG_FILE_ENV).ok();
        Self::load_from(file.as_deref().map(Path::new))
    }

    /// Loads configuration from the given file (if any) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value is invalid.
    pub fn load_from(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }
        builder
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speezy_theme_core::{AccountThemeImplementation, ClassKey};
    use std::io::Write;

    #[test]
    fn defaults_without_sources() {
        let config = ServerConfig::default();
        assert!(!config.preview_enabled);
        assert_eq!(config.theme.theme_name, "speezy");
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp file");
        writeln!(
            file,
            r#"
preview_enabled = true

[theme]
theme_name = "acme"
account_theme_implementation = "single-page"

[theme.classes]
kcInputClass = "rounded-2xl"
"#
        )
        .expect("write config");

        let config = ServerConfig::load_from(Some(file.path())).expect("valid config");
        assert!(config.preview_enabled);
        assert_eq!(config.theme.theme_name, "acme");
        assert_eq!(
            config.theme.account_theme_implementation,
            AccountThemeImplementation::SinglePage
        );
        assert_eq!(
            config.theme.class_overrides().get(&ClassKey::InputClass),
            Some(&"rounded-2xl".to_string())
        );
        // Untouched fields keep their defaults.
        assert_eq!(config.theme.logo_path, "/pkg/logo.svg");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent.toml");
        assert!(ServerConfig::load_from(Some(&path)).is_err());
    }
}
