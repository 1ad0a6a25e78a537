//! Reusable UI components.

pub mod icons;
pub mod language;
pub mod password;

pub use icons::{Icon, ProviderIcon, UiIcon};
pub use language::LanguageSelect;
pub use password::PasswordWrapper;
