//! Core types and display rules for the speezy login theme.
//!
//! This crate provides the render payload the identity server hands to the
//! theme, page selection, the login page's display rules, and the small
//! pieces of client state the pages keep. It has no web framework
//! dependency and compiles for both the server and the browser.
//!
//! # Example
//!
//! ```
//! use speezy_theme_core::{LoginDisplay, Page, RenderContext};
//!
//! let ctx = RenderContext::from_json(
//!     r#"{"pageId": "login.ftl", "realm": {"name": "myrealm", "loginWithEmailAllowed": true}}"#,
//! )
//! .expect("valid payload");
//!
//! assert_eq!(Page::for_id(&ctx.page_id), Page::Login);
//!
//! let display = LoginDisplay::derive(&ctx);
//! assert_eq!(display.identity_label.message_key(), "usernameOrEmail");
//! assert!(display.social.is_none());
//! ```

pub mod classes;
pub mod context;
pub mod display;
pub mod error;
pub mod i18n;
pub mod icons;
pub mod interaction;
pub mod messages;
pub mod mock;
pub mod options;
pub mod page;

pub use classes::{ClassKey, KcClsx, cn};
pub use context::{
    Auth, Client, KeycloakifyExtras, LoginPrefill, Locale, LogoutConfirm, Realm, RenderContext,
    Social, SocialProvider, SupportedLanguage, ThemeType, Urls,
};
pub use display::{
    ErrorPlacement, FieldError, HeaderDisplay, IdentityLabel, LoginDisplay, SettingsAlignment,
    SocialLayout, TemplateDisplay,
};
pub use error::{ContextError, Result};
pub use i18n::I18n;
pub use icons::{IconDefinition, IconStyle, Monogram, resolve_icon};
pub use interaction::{LanguageSwitcher, PasswordReveal, SubmitLatch};
pub use messages::{Message, MessageType, MessagesPerField};
pub use options::{AccountThemeImplementation, ThemeOptions};
pub use page::{Page, PageId};
