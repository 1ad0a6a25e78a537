//! Theme packaging options.
//!
//! These decide how the theme presents itself to the host: its name, which
//! theme types it implements, and the class overrides layered over the
//! Keycloak styling hooks.

use crate::classes::{ClassKey, KcClsx};
use crate::context::ThemeType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the account console theme is provided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountThemeImplementation {
    /// The theme has no account pages.
    #[default]
    None,
    SinglePage,
    MultiPage,
}

/// Options controlling how the theme is packaged and rendered.
///
/// Fields with defaults can be omitted when loading from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOptions {
    /// Name the host knows the theme by.
    #[serde(default = "default_theme_name")]
    pub theme_name: String,

    #[serde(default)]
    pub account_theme_implementation: AccountThemeImplementation,

    /// Brand text shown next to the logo.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Path of the logo image.
    #[serde(default = "default_logo_path")]
    pub logo_path: String,

    /// Extra classes per Keycloak class key, keyed by the key's name.
    #[serde(default)]
    pub classes: BTreeMap<String, String>,
}

fn default_theme_name() -> String {
    "speezy".to_string()
}

fn default_brand() -> String {
    "speezy".to_string()
}

fn default_logo_path() -> String {
    "/pkg/logo.svg".to_string()
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            theme_name: default_theme_name(),
            account_theme_implementation: AccountThemeImplementation::default(),
            brand: default_brand(),
            logo_path: default_logo_path(),
            classes: BTreeMap::new(),
        }
    }
}

impl ThemeOptions {
    /// Returns true if the theme renders payloads of this theme type.
    #[must_use]
    pub fn accepts(&self, theme_type: ThemeType) -> bool {
        match theme_type {
            ThemeType::Login => true,
            ThemeType::Account => {
                self.account_theme_implementation != AccountThemeImplementation::None
            }
        }
    }

    /// Returns the configured class overrides with recognized keys.
    ///
    /// Unrecognized key names are skipped.
    #[must_use]
    pub fn class_overrides(&self) -> BTreeMap<ClassKey, String> {
        self.classes
            .iter()
            .filter_map(|(name, classes)| match ClassKey::from_name(name) {
                Some(key) => Some((key, classes.clone())),
                None => {
                    tracing::warn!(class_key = %name, "Ignoring unknown class key override");
                    None
                }
            })
            .collect()
    }

    /// Builds the class resolver for a page.
    #[must_use]
    pub fn kc_clsx(&self, do_use_default_css: bool) -> KcClsx {
        KcClsx::new(do_use_default_css, self.class_overrides())
    }
}
