//! Mock payloads for previewing pages without a running identity server.

use crate::context::RenderContext;
use crate::error::{ContextError, Result};
use crate::page::PageId;
use serde_json::{Value, json};

const BASE_URL: &str = "https://my-theme.keycloakify.dev";

fn base_payload(page_id: &PageId) -> Value {
    let realm_path = format!("{BASE_URL}/realms/myrealm");
    let actions = format!("{realm_path}/login-actions");
    json!({
        "pageId": page_id.as_str(),
        "themeType": "login",
        "themeName": "speezy",
        "realm": {
            "name": "myrealm",
            "displayName": "myrealm",
            "displayNameHtml": "myrealm",
            "internationalizationEnabled": true,
            "password": true,
            "registrationAllowed": true,
            "rememberMe": true,
            "resetPasswordAllowed": true,
            "loginWithEmailAllowed": true,
            "registrationEmailAsUsername": false,
            "duplicateEmailsAllowed": false
        },
        "url": {
            "loginAction": format!("{actions}/authenticate"),
            "loginUrl": format!("{realm_path}/protocol/openid-connect/auth"),
            "loginRestartFlowUrl": format!("{actions}/restart"),
            "registrationUrl": format!("{actions}/registration"),
            "loginResetCredentialsUrl": format!("{actions}/reset-credentials"),
            "resourcesPath": "/pkg",
            "resourcesCommonPath": "/pkg/common",
            "logoutConfirmAction": format!("{realm_path}/protocol/openid-connect/logout/logout-confirm")
        },
        "social": {
            "displayInfo": true,
            "providers": [
                {
                    "alias": "google",
                    "displayName": "Google",
                    "iconClasses": "fa fa-google",
                    "loginUrl": format!("{realm_path}/broker/google/login"),
                    "providerId": "google"
                },
                {
                    "alias": "github",
                    "displayName": "GitHub",
                    "iconClasses": "fa fa-github",
                    "loginUrl": format!("{realm_path}/broker/github/login"),
                    "providerId": "github"
                }
            ]
        },
        "messagesPerField": {},
        "login": {},
        "usernameHidden": false,
        "registrationDisabled": false,
        "isAppInitiatedAction": false,
        "locale": {
            "currentLanguageTag": "en",
            "supported": [
                {"languageTag": "en", "label": "English", "url": format!("{realm_path}/login?kc_locale=en")},
                {"languageTag": "fr", "label": "Fran\u{e7}ais", "url": format!("{realm_path}/login?kc_locale=fr")}
            ]
        },
        "client": {
            "clientId": "myApp",
            "baseUrl": "http://localhost:8080/myApp"
        }
    })
}

fn page_payload(page_id: &PageId) -> Value {
    match page_id {
        PageId::Info => json!({
            "messageHeader": "Perform the following action(s)",
            "message": {"type": "info", "summary": "Your account has been updated."},
            "requiredActions": ["UPDATE_PASSWORD", "VERIFY_EMAIL"],
            "actionUri": format!("{BASE_URL}/realms/myrealm/login-actions/required-action")
        }),
        PageId::Error => json!({
            "message": {"type": "error", "summary": "Invalid request"}
        }),
        PageId::LoginIdpLinkEmail => json!({
            "idpAlias": "github"
        }),
        PageId::LogoutConfirm => json!({
            "logoutConfirm": {"code": "mock-session-code", "skipLink": false}
        }),
        _ => json!({}),
    }
}

/// Merges `overrides` into `target`: objects merge key by key, anything else
/// replaces the target value.
pub fn deep_merge(target: &mut Value, overrides: Value) {
    match (target, overrides) {
        (Value::Object(target), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, value) => *target = value,
    }
}

/// Builds a realistic payload for a page.
#[must_use]
pub fn mock_context(page_id: &PageId) -> RenderContext {
    let mut payload = base_payload(page_id);
    deep_merge(&mut payload, page_payload(page_id));
    match serde_json::from_value(payload) {
        Ok(ctx) => ctx,
        Err(e) => {
            // The mock data is static; a mismatch is a schema bug.
            tracing::error!(error = %e, page_id = %page_id, "Mock payload does not match schema");
            RenderContext::new(page_id.clone())
        }
    }
}

/// Builds a mock payload with JSON overrides merged over it.
///
/// # Errors
///
/// Returns `ContextError::InvalidOverrides` if `overrides` is not an object,
/// and `ContextError::Malformed` if the merged payload no longer parses.
pub fn mock_context_with(page_id: &PageId, overrides: Value) -> Result<RenderContext, ContextError> {
    if !overrides.is_object() {
        return Err(ContextError::InvalidOverrides {
            details: "expected a JSON object".to_string(),
        }
        .into());
    }

    let mut payload = base_payload(page_id);
    deep_merge(&mut payload, page_payload(page_id));
    deep_merge(&mut payload, overrides);

    serde_json::from_value(payload).map_err(|e| {
        ContextError::Malformed {
            details: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::LoginDisplay;

    #[test]
    fn every_known_page_has_a_mock() {
        for id in PageId::KNOWN {
            let ctx = mock_context(id);
            assert_eq!(&ctx.page_id, id);
            assert_eq!(ctx.realm.name, "myrealm");
        }
    }

    #[test]
    fn login_mock_shows_everything() {
        let display = LoginDisplay::derive(&mock_context(&PageId::Login));
        assert!(display.show_form);
        assert!(display.show_registration);
        assert!(display.show_remember_me);
        assert_eq!(display.social.map(|s| s.columns), Some(2));
    }

    #[test]
    fn page_specific_data_is_merged() {
        let info = mock_context(&PageId::Info);
        assert_eq!(info.required_actions.len(), 2);
        assert!(info.message.is_some());
        assert!(mock_context(&PageId::LogoutConfirm).logout_confirm.is_some());
        assert_eq!(
            mock_context(&PageId::LoginIdpLinkEmail).idp_alias.as_deref(),
            Some("github")
        );
    }

    #[test]
    fn overrides_merge_deeply() {
        let ctx = mock_context_with(
            &PageId::Login,
            json!({"realm": {"registrationAllowed": false}, "usernameHidden": true}),
        )
        .expect("valid overrides");
        assert!(!ctx.realm.registration_allowed);
        // Untouched siblings survive.
        assert!(ctx.realm.remember_me);
        assert!(ctx.username_hidden);
    }

    #[test]
    fn arrays_are_replaced() {
        let ctx = mock_context_with(&PageId::Login, json!({"social": {"providers": []}}))
            .expect("valid overrides");
        assert!(ctx.providers().is_empty());
    }

    #[test]
    fn non_object_overrides_rejected() {
        assert!(mock_context_with(&PageId::Login, json!([1, 2])).is_err());
    }

    #[test]
    fn overrides_breaking_schema_rejected() {
        assert!(mock_context_with(&PageId::Login, json!({"realm": "oops"})).is_err());
    }

    #[test]
    fn deep_merge_replaces_scalars() {
        let mut target = json!({"a": {"b": 1, "c": 2}, "d": 3});
        deep_merge(&mut target, json!({"a": {"b": 10}, "d": {"e": 4}}));
        assert_eq!(target, json!({"a": {"b": 10, "c": 2}, "d": {"e": 4}}));
    }
}
