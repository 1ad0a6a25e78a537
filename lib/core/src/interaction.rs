//! Client-side UI state: password reveal, submit debounce, language switch.
//!
//! These live for one page load. Nothing here is persisted; a reload starts
//! from the initial state.

use crate::context::{Locale, SupportedLanguage};

/// Whether the password input shows its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordReveal {
    #[default]
    Masked,
    Revealed,
}

impl PasswordReveal {
    /// Returns the other state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }

    /// Swaps the state in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    #[must_use]
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    /// The `type` attribute of the password input.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Revealed => "text",
        }
    }

    /// The i18n key of the toggle button's accessible label.
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        match self {
            Self::Masked => "showPassword",
            Self::Revealed => "hidePassword",
        }
    }
}

/// Disables a form's submit control once the form has been submitted.
///
/// Submission is a full navigation, so the latch is never re-armed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitLatch {
    #[default]
    Armed,
    Engaged,
}

impl SubmitLatch {
    /// Records a submit. Returns true for the first submit only.
    pub fn engage(&mut self) -> bool {
        let first = matches!(self, Self::Armed);
        *self = Self::Engaged;
        first
    }

    #[must_use]
    pub fn is_disabled(self) -> bool {
        matches!(self, Self::Engaged)
    }
}

/// The language selector of the page chrome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSwitcher {
    languages: Vec<SupportedLanguage>,
    current: String,
}

impl LanguageSwitcher {
    /// Builds the selector from the payload's locale section.
    #[must_use]
    pub fn new(locale: Option<&Locale>) -> Self {
        locale
            .map(|locale| Self {
                languages: locale.supported.clone(),
                current: locale.current_language_tag.clone(),
            })
            .unwrap_or_default()
    }

    /// The selector is shown only when there is a choice to make.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.languages.len() > 1
    }

    #[must_use]
    pub fn languages(&self) -> &[SupportedLanguage] {
        &self.languages
    }

    #[must_use]
    pub fn current_tag(&self) -> &str {
        &self.current
    }

    /// Returns the URL to navigate to for a language tag.
    #[must_use]
    pub fn href_for(&self, language_tag: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|language| language.language_tag == language_tag)
            .map(|language| language.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_starts_masked() {
        let reveal = PasswordReveal::default();
        assert_eq!(reveal, PasswordReveal::Masked);
        assert_eq!(reveal.input_type(), "password");
        assert_eq!(reveal.toggle_label_key(), "showPassword");
    }

    #[test]
    fn reveal_parity() {
        let mut reveal = PasswordReveal::default();
        for n in 1..=6 {
            reveal.toggle();
            if n % 2 == 0 {
                assert_eq!(reveal, PasswordReveal::Masked);
                assert_eq!(reveal.input_type(), "password");
                assert_eq!(reveal.toggle_label_key(), "showPassword");
            } else {
                assert!(reveal.is_revealed());
                assert_eq!(reveal.input_type(), "text");
                assert_eq!(reveal.toggle_label_key(), "hidePassword");
            }
        }
    }

    #[test]
    fn latch_engages_once_and_stays_engaged() {
        let mut latch = SubmitLatch::default();
        assert!(!latch.is_disabled());
        assert!(latch.engage());
        assert!(latch.is_disabled());
        assert!(!latch.engage());
        assert!(latch.is_disabled());
    }

    fn locale(tags: &[&str]) -> Locale {
        Locale {
            supported: tags
                .iter()
                .map(|tag| SupportedLanguage {
                    language_tag: (*tag).to_string(),
                    label: tag.to_uppercase(),
                    url: format!("/login?kc_locale={tag}"),
                })
                .collect(),
            current_language_tag: tags.first().map(|t| (*t).to_string()).unwrap_or_default(),
        }
    }

    #[test]
    fn switcher_hidden_with_single_language() {
        assert!(!LanguageSwitcher::new(None).is_visible());
        assert!(!LanguageSwitcher::new(Some(&locale(&["en"]))).is_visible());
    }

    #[test]
    fn switcher_resolves_href() {
        let switcher = LanguageSwitcher::new(Some(&locale(&["en", "fr"])));
        assert!(switcher.is_visible());
        assert_eq!(switcher.current_tag(), "en");
        assert_eq!(switcher.href_for("fr"), Some("/login?kc_locale=fr"));
        assert_eq!(switcher.href_for("de"), None);
    }
}
