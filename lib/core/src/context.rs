//! The render payload supplied by the host identity server.
//!
//! The schema mirrors what the host emits: camelCase JSON, most sections
//! optional, unknown fields ignored. The renderer never mutates a payload;
//! components share one instance behind an `Arc`.

use crate::error::{ContextError, Result};
use crate::messages::{Message, MessagesPerField};
use crate::page::PageId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The payload for one page render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    pub page_id: PageId,
    #[serde(default)]
    pub theme_type: ThemeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_name: Option<String>,
    #[serde(default)]
    pub realm: Realm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    #[serde(default)]
    pub url: Urls,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(default)]
    pub messages_per_field: MessagesPerField,
    #[serde(default)]
    pub login: LoginPrefill,
    #[serde(default)]
    pub username_hidden: bool,
    #[serde(default)]
    pub registration_disabled: bool,
    #[serde(default)]
    pub is_app_initiated_action: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub client: Client,

    // Page-specific data read by the fallback page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_header: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_actions: Vec<String>,
    #[serde(default)]
    pub skip_link: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_redirect_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_confirm: Option<LogoutConfirm>,
    /// Alias of the identity provider being linked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idp_alias: Option<String>,

    /// Realm-level extras injected by the theme build.
    #[serde(
        rename = "x-keycloakify",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub keycloakify: Option<KeycloakifyExtras>,
}

impl RenderContext {
    /// Creates a payload for a page with every section at its default.
    #[must_use]
    pub fn new(page_id: PageId) -> Self {
        Self {
            page_id,
            theme_type: ThemeType::default(),
            theme_name: None,
            realm: Realm::default(),
            auth: None,
            url: Urls::default(),
            social: None,
            message: None,
            messages_per_field: MessagesPerField::default(),
            login: LoginPrefill::default(),
            username_hidden: false,
            registration_disabled: false,
            is_app_initiated_action: false,
            locale: None,
            client: Client::default(),
            message_header: None,
            required_actions: Vec::new(),
            skip_link: false,
            page_redirect_uri: None,
            action_uri: None,
            logout_confirm: None,
            idp_alias: None,
            keycloakify: None,
        }
    }

    /// Parses a payload from the host's JSON.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Malformed` if the JSON is invalid or a present
    /// field has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, ContextError> {
        serde_json::from_str(json).map_err(|e| {
            ContextError::Malformed {
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Serializes the payload to JSON.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Encoding` if serialization fails.
    pub fn to_json(&self) -> Result<String, ContextError> {
        serde_json::to_string(self).map_err(|e| {
            ContextError::Encoding {
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Returns the social providers, empty when the section is absent.
    #[must_use]
    pub fn providers(&self) -> &[SocialProvider] {
        self.social
            .as_ref()
            .map(|social| social.providers.as_slice())
            .unwrap_or_default()
    }

    /// Returns realm-defined message overrides, if any.
    #[must_use]
    pub fn message_overrides(&self) -> Option<&BTreeMap<String, String>> {
        self.keycloakify.as_ref().map(|extras| &extras.messages)
    }
}

/// Which of the host's theme types the payload is for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Login,
    Account,
}

impl ThemeType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Account => "account",
        }
    }
}

/// Realm settings controlling which login features are enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Realm {
    pub name: String,
    pub display_name: Option<String>,
    pub display_name_html: Option<String>,
    pub internationalization_enabled: bool,
    /// Password login is enabled.
    pub password: bool,
    pub registration_allowed: bool,
    pub remember_me: bool,
    pub reset_password_allowed: bool,
    pub login_with_email_allowed: bool,
    pub registration_email_as_username: bool,
    pub duplicate_emails_allowed: bool,
}

impl Default for Realm {
    fn default() -> Self {
        Self {
            name: String::new(),
            display_name: None,
            display_name_html: None,
            internationalization_enabled: false,
            password: true,
            registration_allowed: false,
            remember_me: false,
            reset_password_allowed: false,
            login_with_email_allowed: false,
            registration_email_as_username: false,
            duplicate_emails_allowed: false,
        }
    }
}

impl Realm {
    /// Returns the display name, falling back to the realm name.
    #[must_use]
    pub fn title(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }
}

/// State of the current authentication attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Auth {
    pub attempted_username: Option<String>,
    pub selected_credential: Option<String>,
    /// The username is fixed for this attempt.
    pub show_username: bool,
    pub show_reset_credentials: bool,
    pub show_try_another_way_link: bool,
}

/// Pre-built URLs. All values are opaque to the theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Urls {
    pub login_action: String,
    pub login_url: Option<String>,
    pub login_restart_flow_url: Option<String>,
    pub registration_url: Option<String>,
    pub login_reset_credentials_url: Option<String>,
    pub resources_path: Option<String>,
    pub resources_common_path: Option<String>,
    pub logout_confirm_action: Option<String>,
}

/// External identity providers offered on the login page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Social {
    pub providers: Vec<SocialProvider>,
    pub display_info: bool,
}

/// One external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProvider {
    pub alias: String,
    pub display_name: String,
    #[serde(default)]
    pub icon_classes: Option<String>,
    pub login_url: String,
    #[serde(default)]
    pub provider_id: Option<String>,
}

/// Values echoed back from the previous submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginPrefill {
    pub username: Option<String>,
    /// `"on"` when the remember-me checkbox was ticked.
    pub remember_me: Option<String>,
}

impl LoginPrefill {
    /// Returns true if the remember-me checkbox should start ticked.
    #[must_use]
    pub fn remember_me_checked(&self) -> bool {
        self.remember_me
            .as_deref()
            .is_some_and(|value| matches!(value, "on" | "true"))
    }
}

/// Languages the realm offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Locale {
    pub supported: Vec<SupportedLanguage>,
    pub current_language_tag: String,
}

/// A selectable language and the URL that re-renders the page in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedLanguage {
    pub language_tag: String,
    pub label: String,
    pub url: String,
}

/// The client application the user is signing in to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    pub client_id: String,
    pub name: Option<String>,
    pub base_url: Option<String>,
}

/// Data for the logout confirmation page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoutConfirm {
    pub code: String,
    pub skip_link: bool,
}

/// Extras added to the payload by the theme build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeycloakifyExtras {
    pub messages: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_PAYLOAD: &str = r#"{
        "pageId": "login.ftl",
        "realm": {
            "name": "myrealm",
            "displayName": "My Realm",
            "password": true,
            "registrationAllowed": true,
            "loginWithEmailAllowed": true
        },
        "url": {
            "loginAction": "https://auth.example.com/realms/myrealm/login-actions/authenticate",
            "registrationUrl": "https://auth.example.com/realms/myrealm/registrations"
        },
        "social": {
            "providers": [
                {"alias": "google", "displayName": "Google", "iconClasses": "fa fa-google", "loginUrl": "/broker/google/login"}
            ]
        },
        "messagesPerField": {"password": ["Invalid username or password."]},
        "login": {"username": "alice", "rememberMe": "on"},
        "somethingNew": {"ignored": true}
    }"#;

    #[test]
    fn parses_host_payload() {
        let ctx = RenderContext::from_json(LOGIN_PAYLOAD).expect("valid payload");
        assert_eq!(ctx.page_id, PageId::Login);
        assert_eq!(ctx.theme_type, ThemeType::Login);
        assert_eq!(ctx.realm.title(), "My Realm");
        assert!(ctx.realm.registration_allowed);
        assert!(!ctx.realm.remember_me);
        assert_eq!(ctx.providers().len(), 1);
        assert_eq!(ctx.providers()[0].icon_classes.as_deref(), Some("fa fa-google"));
        assert!(ctx.messages_per_field.exists_error(&["username", "password"]));
        assert_eq!(ctx.login.username.as_deref(), Some("alice"));
        assert!(ctx.login.remember_me_checked());
    }

    #[test]
    fn minimal_payload_uses_defaults() {
        let ctx = RenderContext::from_json(r#"{"pageId": "info.ftl"}"#).expect("valid payload");
        assert_eq!(ctx.page_id, PageId::Info);
        assert!(ctx.realm.password);
        assert!(ctx.auth.is_none());
        assert!(ctx.providers().is_empty());
        assert!(!ctx.login.remember_me_checked());
        assert_eq!(ctx, RenderContext::new(PageId::Info));
    }

    #[test]
    fn missing_page_id_is_malformed() {
        let err = RenderContext::from_json(r#"{"realm": {}}"#).expect_err("pageId is required");
        assert!(err.to_string().contains("pageId"));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        assert!(RenderContext::from_json(r#"{"pageId": "login.ftl", "realm": 3}"#).is_err());
        assert!(RenderContext::from_json("not json").is_err());
    }

    #[test]
    fn unknown_page_id_parses() {
        let ctx = RenderContext::from_json(r#"{"pageId": "custom.ftl"}"#).expect("valid payload");
        assert!(ctx.page_id.is_other());
    }

    #[test]
    fn json_round_trip_preserves_payload() {
        let ctx = RenderContext::from_json(LOGIN_PAYLOAD).expect("valid payload");
        let json = ctx.to_json().expect("serializable");
        let again = RenderContext::from_json(&json).expect("valid payload");
        assert_eq!(ctx, again);
    }

    #[test]
    fn realm_title_falls_back_to_name() {
        let realm = Realm {
            name: "myrealm".to_string(),
            display_name: Some(String::new()),
            ..Realm::default()
        };
        assert_eq!(realm.title(), "myrealm");
    }

    #[test]
    fn keycloakify_messages_are_read() {
        let ctx = RenderContext::from_json(
            r#"{"pageId": "login.ftl", "x-keycloakify": {"messages": {"doLogIn": "Go"}}}"#,
        )
        .expect("valid payload");
        let overrides = ctx.message_overrides().expect("overrides present");
        assert_eq!(overrides.get("doLogIn").map(String::as_str), Some("Go"));
    }
}
